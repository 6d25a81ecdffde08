//! IPC between the embedded page and the shell.
//!
//! The engine is given initialization scripts that run in every document
//! before page scripts. They report load progress back through
//! `window.ipc.postMessage(JSON.stringify({...}))`, which reaches the
//! `ipc_handler` registered on the WebView.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ProgressPayload {
    percent: f64,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Load progress carried by a `progress` message, clamped to 0-100.
    pub fn progress(&self) -> Option<u8> {
        if self.kind != "progress" {
            return None;
        }
        let payload: ProgressPayload = serde_json::from_value(self.payload.clone()).ok()?;
        if !payload.percent.is_finite() {
            return None;
        }
        Some(payload.percent.clamp(0.0, 100.0).round() as u8)
    }
}

/// Reports `document.readyState` transitions as coarse load progress.
pub const PROGRESS_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__connexxProgress) { return; }
    window.__connexxProgress = true;
    var steps = { loading: 10, interactive: 70, complete: 100 };
    function report() {
        var percent = steps[document.readyState];
        if (percent === undefined || !window.ipc) { return; }
        window.ipc.postMessage(JSON.stringify({
            kind: "progress",
            payload: { percent: percent }
        }));
    }
    report();
    document.addEventListener("readystatechange", report);
})();
"#;

/// Script that installs a Content-Security-Policy `<meta>` tag in `<head>`.
///
/// Init scripts run before the parser has built `<head>`, so a mutation
/// observer installs the tag as soon as `<head>` is inserted instead of
/// waiting for `DOMContentLoaded`.
pub fn csp_init_script(policy: &str) -> String {
    let policy_json = serde_json::to_string(policy).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
(function() {{
    function install(head) {{
        if (head.querySelector("meta[data-connexx-csp]")) {{ return; }}
        var meta = document.createElement("meta");
        meta.httpEquiv = "Content-Security-Policy";
        meta.content = {policy_json};
        meta.setAttribute("data-connexx-csp", "");
        head.insertBefore(meta, head.firstChild);
    }}
    if (document.head) {{
        install(document.head);
        return;
    }}
    var observer = new MutationObserver(function() {{
        if (document.head) {{
            observer.disconnect();
            install(document.head);
        }}
    }});
    observer.observe(document, {{ childList: true, subtree: true }});
}})();
"#
    )
}

/// Script that steps the page's own session history back one entry.
pub const HISTORY_BACK_SCRIPT: &str = "window.history.back();";

//! The fixed capability set applied to the browser surface.
//!
//! Capabilities are handed to a surface once, when it is built, and a
//! surface never exposes a way to change them afterwards.

/// Engine cache behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// The platform's default HTTP caching rules.
    Default,
}

/// Whether an HTTPS page may pull in resources over plain HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedContentPolicy {
    /// Block every insecure subresource; the load fails closed.
    NeverAllow,
}

/// Browser-engine feature flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    pub script_execution: bool,
    /// Key-value web storage (`localStorage`, `sessionStorage`, cookies).
    pub persistent_storage: bool,
    /// Structured client-side storage (IndexedDB).
    pub structured_storage: bool,
    /// Access to local files, needed for file-upload forms.
    pub file_access: bool,
    /// Lay pages out at their overview width instead of the device width.
    pub overview_mode: bool,
    /// Honor the page's `<meta name="viewport">` width.
    pub wide_viewport: bool,
    /// Pinch and hotkey zoom, plus any native zoom buttons.
    pub zoom_controls: bool,
    pub cache: CachePolicy,
    pub mixed_content: MixedContentPolicy,
}

impl Capabilities {
    /// The shell's non-configurable capability set.
    pub const fn shell() -> Self {
        Self {
            script_execution: true,
            persistent_storage: true,
            structured_storage: true,
            file_access: true,
            overview_mode: true,
            wide_viewport: true,
            zoom_controls: false,
            cache: CachePolicy::Default,
            mixed_content: MixedContentPolicy::NeverAllow,
        }
    }

    /// Content-Security-Policy directives implied by these capabilities.
    pub fn content_security_policy(&self) -> Option<&'static str> {
        match self.mixed_content {
            MixedContentPolicy::NeverAllow => Some("block-all-mixed-content"),
        }
    }

    /// Whether the engine should run without a persistent profile.
    pub fn incognito(&self) -> bool {
        !(self.persistent_storage || self.structured_storage)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::shell()
    }
}

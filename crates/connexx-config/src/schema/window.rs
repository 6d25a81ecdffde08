//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title. Load progress is appended while a page loads.
    pub title: String,
    /// Logical width (valid range: 200-8192).
    pub width: u32,
    /// Logical height (valid range: 200-8192).
    pub height: u32,
    /// Close the shell when back input arrives with no history left.
    pub exit_on_back: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "MVAI Connexx".into(),
            width: 420,
            height: 860,
            exit_on_back: true,
        }
    }
}

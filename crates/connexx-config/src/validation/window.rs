//! Window section validation.

use crate::schema::ShellConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 8192);
    validate_range(errors, "window.height", config.window.height, 200, 8192);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

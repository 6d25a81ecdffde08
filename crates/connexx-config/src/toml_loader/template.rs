//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# MVAI Connexx shell configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
environment = "production"   # production, staging, local
# url = "https://mvai-connexx.com"   # explicit override, wins over environment

[navigation]
# Hosts (and their subdomains) opened in the system browser instead of the app.
# external_domains = ["gumroad.com", "stripe.com", "paypal.com"]

[window]
# title = "MVAI Connexx"
# width = 420            # 200-8192
# height = 860           # 200-8192
# exit_on_back = true    # close the shell when there is no page history left

[notifications]
# native = true          # mirror toasts as OS notifications

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}

//! App section validation: the target URL must be loadable and secure.

use url::{Host, Url};

use crate::schema::ShellConfig;

pub(crate) fn validate_app(errors: &mut Vec<String>, config: &ShellConfig) {
    let target = config.app.target_url();
    let url = match Url::parse(target) {
        Ok(url) => url,
        Err(e) => {
            errors.push(format!("app.url = {target:?} is not a valid URL: {e}"));
            return;
        }
    };

    match url.scheme() {
        "https" => {}
        "http" if url.host().is_some_and(is_development_host) => {}
        "http" => errors.push(format!(
            "app.url = {target:?} must use https (plain http is only allowed for local development hosts)"
        )),
        other => errors.push(format!(
            "app.url = {target:?} has unsupported scheme {other:?}"
        )),
    }

    if url.host().is_none() {
        errors.push(format!("app.url = {target:?} has no host"));
    }
}

/// Loopback or private-network hosts used for local development servers.
pub(crate) fn is_development_host(host: Host<&str>) -> bool {
    match host {
        Host::Domain(name) => name == "localhost" || name.ends_with(".localhost"),
        Host::Ipv4(ip) => ip.is_loopback() || ip.is_private(),
        Host::Ipv6(ip) => ip.is_loopback(),
    }
}

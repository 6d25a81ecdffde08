//! Navigation section validation: external domains must be bare hostnames.

use crate::schema::ShellConfig;

pub(crate) fn validate_navigation(errors: &mut Vec<String>, config: &ShellConfig) {
    for (i, domain) in config.navigation.external_domains.iter().enumerate() {
        if let Err(reason) = check_domain(domain) {
            errors.push(format!(
                "navigation.external_domains[{i}] = {domain:?} {reason}"
            ));
        }
    }
}

fn check_domain(domain: &str) -> Result<(), &'static str> {
    if domain.is_empty() {
        return Err("is empty");
    }
    if domain.contains("://") {
        return Err("must not include a scheme");
    }
    if domain.contains(['/', '?', '#', '@', ':']) {
        return Err("must be a bare hostname");
    }
    if domain.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err("has an empty label");
    }
    Ok(())
}

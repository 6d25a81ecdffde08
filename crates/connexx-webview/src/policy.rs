//! Navigation routing: which URLs stay in the embedded surface and which
//! are handed to the system browser.
//!
//! Matching is done on the parsed host, never on the raw URL text, so a
//! path or query that merely mentions a payment domain
//! (`https://app.example/?next=stripe.com`) stays in the surface, and a
//! look-alike host (`stripe.com.attacker.net`) is not mistaken for the
//! real one.

use url::Url;

/// Where a navigation request should be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the embedded surface perform the navigation unmodified.
    LoadInSurface,
    /// Cancel it in the surface and open the URL in the system browser.
    OpenExternally,
}

/// Inspects every outbound navigation before it proceeds.
///
/// Called from browser-engine callbacks, which may run off the UI thread
/// on some platforms, hence `Send + Sync`.
pub trait NavigationInterceptor: Send + Sync {
    fn intercept(&self, url: &str) -> NavigationDecision;
}

/// Host-suffix policy over a fixed set of external domains.
#[derive(Debug, Clone, Default)]
pub struct NavigationPolicy {
    external_domains: Vec<String>,
}

impl NavigationPolicy {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let external_domains = domains
            .into_iter()
            .map(|d| normalize_domain(d.as_ref()))
            .filter(|d| !d.is_empty())
            .collect();
        Self { external_domains }
    }

    pub fn external_domains(&self) -> &[String] {
        &self.external_domains
    }

    /// Whether `url`'s host is one of the external domains or a subdomain of one.
    pub fn is_external(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        let host = normalize_domain(host);
        self.external_domains
            .iter()
            .any(|domain| host_matches(&host, domain))
    }
}

impl NavigationInterceptor for NavigationPolicy {
    fn intercept(&self, url: &str) -> NavigationDecision {
        if self.is_external(url) {
            NavigationDecision::OpenExternally
        } else {
            NavigationDecision::LoadInSurface
        }
    }
}

fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

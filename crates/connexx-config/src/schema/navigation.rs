//! Navigation routing configuration.

use serde::{Deserialize, Serialize};

/// Payment-provider domains opened in the system browser by default:
/// a payment-link service, a card processor, an alternative payment network.
pub const DEFAULT_EXTERNAL_DOMAINS: &[&str] = &["gumroad.com", "stripe.com", "paypal.com"];

/// Hosts that must never be rendered inside the embedded surface.
///
/// A navigation whose host equals one of these domains, or is a
/// subdomain of one, is handed to the system browser instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub external_domains: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            external_domains: DEFAULT_EXTERNAL_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

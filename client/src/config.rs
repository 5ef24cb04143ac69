//! Build-time configuration for the browser bundle.
//!
//! The WASM bundle has no process environment at runtime, so settings are
//! baked in with `option_env!` when the client is compiled and fall back to
//! local-development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use schema::identity::IdentityConfig;

/// Backend REST base URL.
pub fn api_base_url() -> &'static str {
    non_empty_or(option_env!("BALANCEBITE_API_URL"), schema::DEFAULT_API_BASE_URL)
}

/// Identity-provider settings. A build without an API key yields a config
/// whose calls fail with `NotConfigured`.
pub fn identity_config() -> IdentityConfig {
    IdentityConfig::new(option_env!("BALANCEBITE_FIREBASE_API_KEY").unwrap_or_default())
}

fn non_empty_or(value: Option<&'static str>, fallback: &'static str) -> &'static str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback)
}

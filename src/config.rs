//! Build-time configuration.

/// Base URL used when no override is supplied at build time.
pub const DEFAULT_DIRECTUS_URL: &str = "http://localhost:8055";

/// Identity provider base URL.
///
/// Reads the `DIRECTUS_URL` environment variable at compile time so the
/// deployed bundle can point at a different provider than a local dev
/// instance.
pub fn directus_url() -> String {
    option_env!("DIRECTUS_URL")
        .unwrap_or(DEFAULT_DIRECTUS_URL)
        .to_owned()
}

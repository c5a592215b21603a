//! Runtime configuration of the frontend.
//!
//! The API origin is baked in at build time through the `TENDER_API_BASE`
//! environment variable (e.g. `TENDER_API_BASE=https://tenders.example.com trunk build`).
//! An empty value makes every request relative to the page origin.

/// Origin used when `TENDER_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("TENDER_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(AppConfig::new("http://api.local//").api_base, "http://api.local");
        assert_eq!(AppConfig::new("").api_base, "");
    }

    #[test]
    fn from_env_yields_usable_origin() {
        let config = AppConfig::from_env();
        assert!(!config.api_base.ends_with('/'));
    }
}

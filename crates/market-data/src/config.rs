//! API configuration

use std::fmt;

/// Base URL of the Financial Modeling Prep "stable" API
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep client configuration
#[derive(Clone)]
pub struct FmpConfig {
    /// Base URL that endpoint paths are appended to (no trailing slash)
    pub base_url: String,

    /// API key sent as the `apikey` query parameter
    pub api_key: Option<String>,
}

impl FmpConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read `FMP_API_KEY` and an optional `FMP_BASE_URL` override
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("FMP_API_KEY").ok(),
            std::env::var("FMP_BASE_URL").ok(),
        )
    }

    /// Build from raw values. An unset or empty key means no key; any other
    /// key is kept exactly as given.
    pub fn from_values(api_key: Option<String>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self {
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Key to send; empty when none is configured
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key().is_empty()
    }
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
        }
    }
}

impl fmt::Debug for FmpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_defaults() {
        let config = FmpConfig::from_values(None, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), "");
        assert!(!config.has_api_key());

        let empty = FmpConfig::from_values(Some(String::new()), Some(String::new()));
        assert_eq!(empty.base_url, DEFAULT_BASE_URL);
        assert!(!empty.has_api_key());
    }

    #[test]
    fn test_key_kept_verbatim() {
        let padded = FmpConfig::from_values(Some(" key ".into()), None);
        assert_eq!(padded.api_key(), " key ");

        let spaces = FmpConfig::from_values(Some("  ".into()), None);
        assert_eq!(spaces.api_key(), "  ");
        assert!(spaces.has_api_key());
    }

    #[test]
    fn test_from_values_overrides() {
        let config = FmpConfig::from_values(
            Some("secret".into()),
            Some("http://localhost:8080/stable/".into()),
        );
        assert_eq!(config.base_url, "http://localhost:8080/stable");
        assert_eq!(config.api_key(), "secret");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = FmpConfig::new("super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}

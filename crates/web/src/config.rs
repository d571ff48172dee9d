//! Stampdesk configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STAMPDESK_HOST` - Bind address (default: 127.0.0.1)
//! - `STAMPDESK_PORT` - Listen port (default: 5000)
//! - `STAMPDESK_BASE_URL` - Public URL; `https://` enables secure cookies
//!   (default: `http://127.0.0.1:5000`)
//! - `STAMPDESK_COMPANY_NAME` - Company drawn around the stamp
//! - `STAMPDESK_COMPANY_WEBSITE` - Company website linked in the footer
//! - `STAMPDESK_COMPANY_DESCRIPTION` - Tagline shown under the header
//! - `STAMPDESK_LOG_FORMAT` - `text` or `json` (default: text)
//! - `STAMPDESK_SESSION_CAPACITY` - Most sessions kept in memory (default: 10000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate, 0.0 to 1.0 (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_COMPANY_NAME: &str = "SEIKO ELECTRIC CO. LTD.";
const DEFAULT_COMPANY_WEBSITE: &str = "https://www.seiko-denki.co.jp/en/";
const DEFAULT_COMPANY_DESCRIPTION: &str =
    "Ecologically friendly and safety contributing to infrastructure building";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Stampdesk application configuration.
#[derive(Debug, Clone)]
pub struct StampdeskConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: String,
    /// Company branding for pages and stamps
    pub company: CompanyConfig,
    /// Log output format
    pub log_format: LogFormat,
    /// Upper bound on sessions held in memory
    pub session_capacity: u64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production", "staging")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Company branding.
#[derive(Debug, Clone)]
pub struct CompanyConfig {
    /// Name drawn around the stamp, e.g. "SEIKO ELECTRIC CO. LTD."
    pub name: String,
    /// Public website
    pub website: String,
    /// One-line description
    pub description: String,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPANY_NAME.to_string(),
            website: DEFAULT_COMPANY_WEBSITE.to_string(),
            description: DEFAULT_COMPANY_DESCRIPTION.to_string(),
        }
    }
}

impl CompanyConfig {
    /// Load only the company branding from the environment.
    ///
    /// Unlike [`StampdeskConfig::from_env`] this cannot fail: unrelated
    /// server variables are never parsed.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build company branding from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            name: lookup("STAMPDESK_COMPANY_NAME").unwrap_or(defaults.name),
            website: lookup("STAMPDESK_COMPANY_WEBSITE").unwrap_or(defaults.website),
            description: lookup("STAMPDESK_COMPANY_DESCRIPTION").unwrap_or(defaults.description),
        }
    }
}

impl Default for StampdeskConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            base_url: "http://127.0.0.1:5000".to_string(),
            company: CompanyConfig::default(),
            log_format: LogFormat::Text,
            session_capacity: 10_000,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}

impl StampdeskConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or_default(&lookup, "STAMPDESK_HOST", defaults.host)?;
        let port = parse_or_default(&lookup, "STAMPDESK_PORT", defaults.port)?;
        let base_url = lookup("STAMPDESK_BASE_URL").unwrap_or(defaults.base_url);
        let log_format = parse_or_default(&lookup, "STAMPDESK_LOG_FORMAT", defaults.log_format)?;
        let session_capacity =
            parse_or_default(&lookup, "STAMPDESK_SESSION_CAPACITY", defaults.session_capacity)?;
        if session_capacity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STAMPDESK_SESSION_CAPACITY".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let company = CompanyConfig::from_lookup(&lookup);

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty());
        let sentry_environment = lookup("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = lookup("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentry_sample_rate);
        let sentry_traces_sample_rate = lookup("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentry_traces_sample_rate);

        Ok(Self {
            host,
            port,
            base_url,
            company,
            log_format,
            session_capacity,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise fall back to `default`.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StampdeskConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.company.name, "SEIKO ELECTRIC CO. LTD.");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.session_capacity, 10_000);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_company_ignores_unrelated_invalid_values() {
        let lookup = lookup_from(&[
            ("STAMPDESK_PORT", "not-a-port"),
            ("STAMPDESK_COMPANY_NAME", "ACME CORP."),
        ]);

        assert!(StampdeskConfig::from_lookup(&lookup).is_err());

        let company = CompanyConfig::from_lookup(&lookup);
        assert_eq!(company.name, "ACME CORP.");
        assert_eq!(company.website, CompanyConfig::default().website);
    }

    #[test]
    fn test_overrides() {
        let config = StampdeskConfig::from_lookup(lookup_from(&[
            ("STAMPDESK_HOST", "0.0.0.0"),
            ("STAMPDESK_PORT", "8080"),
            ("STAMPDESK_BASE_URL", "https://stamps.internal"),
            ("STAMPDESK_COMPANY_NAME", "ACME CORP."),
            ("STAMPDESK_LOG_FORMAT", "JSON"),
            ("STAMPDESK_SESSION_CAPACITY", "500"),
            ("SENTRY_SAMPLE_RATE", "0.25"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.company.name, "ACME CORP.");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.session_capacity, 500);
        assert!(config.is_secure());
        assert!((config.sentry_sample_rate - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_port() {
        let result = StampdeskConfig::from_lookup(lookup_from(&[("STAMPDESK_PORT", "http")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "STAMPDESK_PORT"
        ));
    }

    #[test]
    fn test_zero_session_capacity_rejected() {
        let result =
            StampdeskConfig::from_lookup(lookup_from(&[("STAMPDESK_SESSION_CAPACITY", "0")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "STAMPDESK_SESSION_CAPACITY"
        ));
    }

    #[test]
    fn test_invalid_log_format() {
        let result =
            StampdeskConfig::from_lookup(lookup_from(&[("STAMPDESK_LOG_FORMAT", "yaml")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_sentry_dsn_is_disabled() {
        let config = StampdeskConfig::from_lookup(lookup_from(&[("SENTRY_DSN", "")])).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}

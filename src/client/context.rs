//! # Connection configuration
//!
//! A [`MambuConfig`] carries everything the engine needs to know about the
//! tenant it talks to: the domain name, the credentials and an optional
//! transport timeout. It is built once and handed to
//! [`crate::ServiceExecutor::new`]; there is no global registry.
//!
//! ```no_run
//! use oxi_mambu::{Credentials, MambuConfig, ServiceExecutor};
//! use std::time::Duration;
//!
//! // Explicit configuration
//! let config = MambuConfig::new(
//!     "demo.sandbox.mambu.com",
//!     Credentials::api_key("my-api-consumer-key"),
//! )
//! .with_timeout(Duration::from_secs(30));
//!
//! // Or from MAMBU_DOMAIN / MAMBU_API_KEY / MAMBU_USERNAME / MAMBU_PASSWORD
//! let config = MambuConfig::from_env().unwrap();
//!
//! let executor = ServiceExecutor::new(config);
//! ```
use std::time::Duration;

use base64::Engine;

use crate::APIResult;

/// How requests authenticate against the API.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password sent as HTTP Basic authentication.
    Basic { username: String, password: String },
    /// API consumer key sent in the `apiKey` header.
    ApiKey(String),
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(key.into())
    }

    /// Header name and value attached to every request.
    pub(crate) fn header(&self) -> (&'static str, String) {
        match self {
            Credentials::Basic { username, password } => {
                let auth_string = format!("{username}:{password}");
                let auth_string = base64::engine::general_purpose::STANDARD.encode(auth_string);
                ("Authorization", format!("Basic {auth_string}"))
            }
            Credentials::ApiKey(key) => ("apiKey", key.clone()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
        }
    }
}

/// Tenant domain, credentials and transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MambuConfig {
    pub(crate) domain: String,
    pub(crate) credentials: Credentials,
    pub(crate) timeout: Option<Duration>,
}

impl MambuConfig {
    /// Creates a configuration for `domain`, e.g. `"demo.mambu.com"`.
    pub fn new(domain: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            domain: domain.into(),
            credentials,
            timeout: None,
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MAMBU_DOMAIN`: tenant domain name
    /// - `MAMBU_API_KEY`: API consumer key, preferred when set
    /// - `MAMBU_USERNAME` / `MAMBU_PASSWORD`: Basic credentials otherwise
    /// - `MAMBU_TIMEOUT_SECS`: optional transport timeout
    ///
    /// # Errors
    ///
    /// Returns an environment error if the domain or both kinds of
    /// credentials are missing.
    pub fn from_env() -> APIResult<Self> {
        let domain = std::env::var("MAMBU_DOMAIN")?;
        let credentials = match std::env::var("MAMBU_API_KEY") {
            Ok(key) => Credentials::ApiKey(key),
            Err(_) => Credentials::basic(
                std::env::var("MAMBU_USERNAME")?,
                std::env::var("MAMBU_PASSWORD")?,
            ),
        };
        let timeout = match std::env::var("MAMBU_TIMEOUT_SECS") {
            Ok(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(_) => {
                    log::warn!("Ignoring MAMBU_TIMEOUT_SECS={secs:?}, not a number of seconds");
                    None
                }
            },
            Err(_) => None,
        };
        Ok(Self {
            domain,
            credentials,
            timeout,
        })
    }

    /// Sets the transport timeout applied to each whole exchange.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    /// Replaces the credentials, e.g. after rotating an API key.
    #[must_use]
    pub fn with_credentials(self, credentials: Credentials) -> Self {
        Self {
            credentials,
            ..self
        }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credentials_are_base64_encoded() {
        let (name, value) = Credentials::basic("api", "secret").header();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Basic YXBpOnNlY3JldA==");
    }

    #[test]
    fn api_key_uses_its_own_header() {
        let (name, value) = Credentials::api_key("k3y").header();
        assert_eq!(name, "apiKey");
        assert_eq!(value, "k3y");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = MambuConfig::new("demo.mambu.com", Credentials::basic("api", "secret"));
        let printed = format!("{config:?}");
        assert!(printed.contains("api"));
        assert!(!printed.contains("secret"));

        let printed = format!("{:?}", Credentials::api_key("k3y"));
        assert!(!printed.contains("k3y"));
    }

    #[test]
    fn builders_keep_other_fields() {
        let config = MambuConfig::new("demo.mambu.com", Credentials::api_key("a"))
            .with_timeout(Duration::from_secs(5))
            .with_credentials(Credentials::api_key("b"));
        assert_eq!(config.domain(), "demo.mambu.com");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.credentials, Credentials::api_key("b"));
    }
}

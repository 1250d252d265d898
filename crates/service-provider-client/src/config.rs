use std::time::Duration;

use crate::constants::DEFAULT_SERVICE_PROVIDER_URL;
use crate::error::{Result, ServiceProviderError};
use crate::provider::Provider;
use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, Routing};

/// Client configuration, usually loaded from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_provider_url: String,
    pub routing: Routing,
    /// `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_provider_url: DEFAULT_SERVICE_PROVIDER_URL.to_string(),
            routing: Routing::default(),
            timeout: None,
            retry: RetryPolicy::none(),
        }
    }
}

impl ClientConfig {
    /// Load from process environment variables.
    ///
    /// - `SERVICE_PROVIDER_URL` (default `http://127.0.0.1:8080/`)
    /// - `SERVICE_PROVIDER_ROUTING`: `root` or `endpoint` (default `endpoint`)
    /// - `SERVICE_PROVIDER_TIMEOUT_SECS`: request timeout, unset for none
    /// - `SERVICE_PROVIDER_RETRY_ATTEMPTS`: total attempts per call (default 1)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let service_provider_url = var("SERVICE_PROVIDER_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.service_provider_url);

        let routing = match var("SERVICE_PROVIDER_ROUTING") {
            Some(v) => v.parse()?,
            None => defaults.routing,
        };

        let timeout = var("SERVICE_PROVIDER_TIMEOUT_SECS")
            .map(|v| parse_number::<u64>("SERVICE_PROVIDER_TIMEOUT_SECS", &v))
            .transpose()?
            .map(Duration::from_secs);

        let retry = match var("SERVICE_PROVIDER_RETRY_ATTEMPTS") {
            Some(v) => {
                let attempts = parse_number::<u32>("SERVICE_PROVIDER_RETRY_ATTEMPTS", &v)?;
                if attempts == 0 {
                    return Err(ServiceProviderError::ConfigError(
                        "SERVICE_PROVIDER_RETRY_ATTEMPTS must be at least 1".to_string(),
                    ));
                }
                RetryPolicy::with_attempts(attempts)
            }
            None => defaults.retry,
        };

        Ok(Self {
            service_provider_url,
            routing,
            timeout,
            retry,
        })
    }

    /// Build a [`Provider`] from this configuration.
    pub fn provider(&self) -> Result<Provider> {
        let http = HttpTransport::build_http_client(self.timeout)?;
        let transport =
            HttpTransport::with_http_client(&self.service_provider_url, self.routing, http)?;
        Ok(Provider::with_transport(transport))
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ServiceProviderError::ConfigError(format!("invalid {key} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.service_provider_url, "http://127.0.0.1:8080/");
        assert_eq!(config.routing, Routing::Endpoint);
        assert!(config.timeout.is_none());
        assert_eq!(config.retry.max_attempts, 1);
    }

    #[test]
    fn test_all_vars_applied() {
        let config = ClientConfig::from_vars(vars(&[
            ("SERVICE_PROVIDER_URL", "http://sp.local:9000/"),
            ("SERVICE_PROVIDER_ROUTING", "root"),
            ("SERVICE_PROVIDER_TIMEOUT_SECS", "15"),
            ("SERVICE_PROVIDER_RETRY_ATTEMPTS", "4"),
        ]))
        .unwrap();
        assert_eq!(config.service_provider_url, "http://sp.local:9000/");
        assert_eq!(config.routing, Routing::Root);
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.retry.max_attempts, 4);
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config =
            ClientConfig::from_vars(vars(&[("SERVICE_PROVIDER_URL", "  ")])).unwrap();
        assert_eq!(config.service_provider_url, DEFAULT_SERVICE_PROVIDER_URL);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_timeout = ClientConfig::from_vars(vars(&[("SERVICE_PROVIDER_TIMEOUT_SECS", "soon")]));
        assert!(matches!(bad_timeout, Err(ServiceProviderError::ConfigError(_))));

        let bad_routing = ClientConfig::from_vars(vars(&[("SERVICE_PROVIDER_ROUTING", "both")]));
        assert!(matches!(bad_routing, Err(ServiceProviderError::ConfigError(_))));

        let zero_attempts =
            ClientConfig::from_vars(vars(&[("SERVICE_PROVIDER_RETRY_ATTEMPTS", "0")]));
        assert!(matches!(zero_attempts, Err(ServiceProviderError::ConfigError(_))));
    }

    #[test]
    fn test_provider_uses_configured_routing() {
        let config = ClientConfig {
            service_provider_url: "http://127.0.0.1:8080".to_string(),
            routing: Routing::Root,
            ..ClientConfig::default()
        };
        let provider = config.provider().unwrap();
        assert_eq!(provider.transport().routing(), Routing::Root);
        assert_eq!(provider.transport().address(), "http://127.0.0.1:8080/");
    }
}

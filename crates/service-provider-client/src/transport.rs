use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::constants::API_ROOT;
use crate::envelope::Envelope;
use crate::error::{Result, ServiceProviderError};

/// Where a request is actually sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Routing {
    /// POST every call to the configured root address; the composed endpoint
    /// path is informational only. Matches the legacy JS client.
    Root,
    /// POST to the composed `api/v0.1/<endpoint>` path.
    #[default]
    Endpoint,
}

impl std::str::FromStr for Routing {
    type Err = ServiceProviderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(Self::Root),
            "endpoint" => Ok(Self::Endpoint),
            other => Err(ServiceProviderError::ConfigError(format!(
                "unknown routing mode '{other}' (expected 'root' or 'endpoint')"
            ))),
        }
    }
}

/// JSON-over-HTTP transport to a single Service Provider address.
///
/// Every call is one POST. No retries and, unless a timeout is configured
/// on the underlying client, no timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    address: String,
    routing: Routing,
}

impl HttpTransport {
    /// Create a transport for `address` with default routing.
    pub fn new(address: &str) -> Result<Self> {
        Self::with_http_client(address, Routing::default(), reqwest::Client::new())
    }

    /// Create a transport with an explicit routing mode and `reqwest::Client`.
    pub fn with_http_client(address: &str, routing: Routing, http: reqwest::Client) -> Result<Self> {
        Ok(Self {
            http,
            address: normalize_address(address)?,
            routing,
        })
    }

    /// Build a `reqwest::Client` with an optional request timeout.
    pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| ServiceProviderError::ConfigError(format!("failed to build HTTP client: {e}")))
    }

    /// Root address, always ending in `/`.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn routing(&self) -> Routing {
        self.routing
    }

    /// Full path of an API endpoint, e.g. `endpoint("/subscribe")`.
    pub fn endpoint(&self, postfix: &str) -> String {
        format!("{}{API_ROOT}{postfix}", self.address)
    }

    /// POST `payload` (or no body at all) and decode the reply envelope.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: Option<Value>,
    ) -> Result<T> {
        let target = match self.routing {
            Routing::Root => self.address.as_str(),
            Routing::Endpoint => endpoint,
        };
        tracing::debug!(
            endpoint,
            url = target,
            has_body = payload.is_some(),
            "service provider request"
        );

        let mut req = self.http.post(target);
        if let Some(ref body) = payload {
            req = req.json(body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ServiceProviderError::HttpError(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ServiceProviderError::HttpError(format!(
                "{endpoint} returned status {status}"
            )));
        }

        let reply: Value = resp
            .json()
            .await
            .map_err(|e| ServiceProviderError::HttpError(format!("failed to read reply: {e}")))?;

        Envelope::decode(reply)?.into_result()
    }
}

fn normalize_address(address: &str) -> Result<String> {
    let url = Url::parse(address)
        .map_err(|e| ServiceProviderError::ConfigError(format!("invalid address '{address}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ServiceProviderError::ConfigError(format!(
            "address '{address}' cannot be used as a base URL"
        )));
    }
    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

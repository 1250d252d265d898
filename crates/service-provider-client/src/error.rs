use thiserror::Error;

use crate::types::ApiErrorObject;

/// Errors returned by Service Provider client operations.
#[derive(Debug, Error)]
pub enum ServiceProviderError {
    /// Connection, DNS or non-success status. Never produced by the server's envelope.
    #[error("http error: {0}")]
    HttpError(String),

    /// The server answered with an `error` envelope.
    #[error("API response error: {}", .0.error)]
    ApiError(ApiErrorObject),

    /// The server answered with neither `result` nor `error`.
    #[error("Unknown API Error")]
    UnknownApiError,

    /// `result` was present but did not have the expected shape.
    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl ServiceProviderError {
    /// The server-reported error object, if this is an [`ApiError`](Self::ApiError).
    pub fn api_error(&self) -> Option<&ApiErrorObject> {
        match self {
            Self::ApiError(obj) => Some(obj),
            _ => None,
        }
    }

    /// Whether the failure happened below the envelope layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }
}

pub type Result<T> = std::result::Result<T, ServiceProviderError>;

//! Reply envelope of the Service Provider API.
//!
//! Every reply is a JSON object carrying exactly one of `result` or `error`.
//! Replies are decoded into a tagged [`Envelope`] instead of being handed
//! around as untyped JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ServiceProviderError};
use crate::types::ApiErrorObject;

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(ApiErrorObject),
    /// Neither arm could be decoded.
    Malformed,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a raw reply body.
    ///
    /// A non-null `result` wins over `error`. A `result` that does not match `T`
    /// is a [`DecodeError`](ServiceProviderError::DecodeError), not `Malformed`.
    pub fn decode(reply: Value) -> Result<Self> {
        let mut fields = match reply {
            Value::Object(map) => map,
            other => {
                tracing::warn!(reply = %other, "service provider reply is not a JSON object");
                return Ok(Self::Malformed);
            }
        };

        let result = fields.remove("result").filter(|v| !v.is_null());
        let error = fields.remove("error").filter(|v| !v.is_null());

        match (result, error) {
            (Some(result), error) => {
                if error.is_some() {
                    tracing::warn!("service provider reply carries both result and error");
                }
                serde_json::from_value(result)
                    .map(Self::Success)
                    .map_err(|e| {
                        ServiceProviderError::DecodeError(format!("unexpected result shape: {e}"))
                    })
            }
            (None, Some(error)) => match serde_json::from_value::<ApiErrorObject>(error) {
                Ok(obj) => Ok(Self::Failure(obj)),
                Err(e) => {
                    tracing::warn!(error = %e, "service provider error payload is malformed");
                    Ok(Self::Malformed)
                }
            },
            (None, None) => Ok(Self::Malformed),
        }
    }
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(obj) => Err(ServiceProviderError::ApiError(obj)),
            Self::Malformed => Err(ServiceProviderError::UnknownApiError),
        }
    }
}

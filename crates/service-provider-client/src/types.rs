use serde::{Deserialize, Serialize};
use std::fmt;

/// zkSync account address. Treated as an opaque token: no format validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Signature issued by the Service Provider for a minting transfer.
/// Attached unmodified to the pending transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(pub serde_json::Value);

/// Not-yet-submitted transfer-from descriptor built by the wallet SDK.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferFrom(pub serde_json::Value);

/// One subscription period's payment: the transfer into the subscription
/// wallet plus the burn transfer and its Ethereum signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTx {
    pub transfer_to_sub: serde_json::Value,
    pub burn_tx: serde_json::Value,
    pub burn_tx_eth_signature: serde_json::Value,
}

/// Server-reported error object carried in the `error` arm of an envelope.
///
/// Keys other than `error` are kept in `extra`, so the object serializes
/// back exactly as the server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorObject {
    pub error: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiErrorObject {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Community registered with the Service Provider.
///
/// Field names stay snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub name: String,
    pub erc20_token_name: String,
    pub erc20_token_address: Address,
}

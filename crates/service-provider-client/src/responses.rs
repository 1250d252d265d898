//! Result payloads returned by the Service Provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Signature;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionCheckResponse {
    /// `true` if the user currently holds a subscription to the community.
    pub subscribed: bool,
    /// Start of the current subscription period. Only set when subscribed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// End of the current subscription period. Only set when subscribed.
    #[serde(default, alias = "endedAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantedTokensResponse {
    /// Symbol of the community token.
    pub token: String,
    /// Amount of tokens the user can still mint. May be zero.
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintingSignature {
    pub zksync_signature: Signature,
}

/// Raw `result` of `get_minting_signature`; callers receive the inner signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintingSignatureResponse {
    pub signature: MintingSignature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCommunitiesResponse {
    pub communities: Vec<String>,
}

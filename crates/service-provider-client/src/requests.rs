//! Request payloads sent to the Service Provider.

use serde::Serialize;

use crate::types::{Address, Community, SubscriptionTx, TransferFrom};

/// Body of `is_user_subscribed` and `granted_tokens`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCommunityRequest<'a> {
    pub user: &'a Address,
    pub community_name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintingSignatureRequest<'a> {
    pub user: &'a Address,
    pub community_name: &'a str,
    pub minting_tx: &'a TransferFrom,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest<'a> {
    pub user: &'a Address,
    pub community_name: &'a str,
    pub subscription_wallet: &'a Address,
    pub txs: &'a [SubscriptionTx],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCommunitiesRequest<'a> {
    pub user: &'a Address,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeclareCommunityRequest<'a> {
    #[serde(flatten)]
    pub community: &'a Community,
}

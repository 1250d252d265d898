//! Typed façade over the Service Provider API.
//!
//! Each operation shapes a request payload, hands it to [`HttpTransport`] and
//! returns the typed result. Errors are the transport's errors, unmodified.

use serde::Serialize;
use serde_json::Value;

use crate::constants::{
    DECLARE_COMMUNITY, GENESIS_WALLET_ADDRESS, GET_MINTING_SIGNATURE, GRANTED_TOKENS,
    IS_USER_SUBSCRIBED, RELATED_COMMUNITIES, SUBSCRIBE,
};
use crate::error::Result;
use crate::requests::{
    DeclareCommunityRequest, MintingSignatureRequest, RelatedCommunitiesRequest,
    SubscribeRequest, UserCommunityRequest,
};
use crate::responses::{
    GrantedTokensResponse, MintingSignatureResponse, RelatedCommunitiesResponse,
    SubscriptionCheckResponse,
};
use crate::transport::HttpTransport;
use crate::types::{Address, Community, Signature, SubscriptionTx, TransferFrom};

/// Client for a single Service Provider.
#[derive(Debug, Clone)]
pub struct Provider {
    transport: HttpTransport,
}

impl Provider {
    /// Connect to the Service Provider at `address` with default settings.
    pub fn new(address: &str) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(address)?,
        })
    }

    pub fn with_transport(transport: HttpTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Address of the account minted community tokens are sent from.
    pub async fn genesis_wallet_address(&self) -> Result<Address> {
        let endpoint = self.transport.endpoint(GENESIS_WALLET_ADDRESS);
        self.transport.request(&endpoint, None).await
    }

    pub async fn is_user_subscribed(
        &self,
        user: &Address,
        community_name: &str,
    ) -> Result<SubscriptionCheckResponse> {
        let endpoint = self.transport.endpoint(IS_USER_SUBSCRIBED);
        let body = to_body(&UserCommunityRequest {
            user,
            community_name,
        })?;
        self.transport.request(&endpoint, Some(body)).await
    }

    /// Token symbol and amount the user may still mint in the community.
    pub async fn granted_tokens(
        &self,
        user: &Address,
        community_name: &str,
    ) -> Result<GrantedTokensResponse> {
        let endpoint = self.transport.endpoint(GRANTED_TOKENS);
        let body = to_body(&UserCommunityRequest {
            user,
            community_name,
        })?;
        self.transport.request(&endpoint, Some(body)).await
    }

    /// Ask the server to sign a prepared minting transfer.
    ///
    /// The server replies with `{signature: {zksyncSignature}}`; only the
    /// inner signature is returned.
    pub async fn get_minting_signature(
        &self,
        user: &Address,
        community_name: &str,
        minting_tx: &TransferFrom,
    ) -> Result<Signature> {
        let endpoint = self.transport.endpoint(GET_MINTING_SIGNATURE);
        let body = to_body(&MintingSignatureRequest {
            user,
            community_name,
            minting_tx,
        })?;
        let response: MintingSignatureResponse =
            self.transport.request(&endpoint, Some(body)).await?;
        Ok(response.signature.zksync_signature)
    }

    /// Report a subscription batch.
    ///
    /// The transactions must already be submitted to the network; this call
    /// only informs the server.
    pub async fn subscribe(
        &self,
        user: &Address,
        community_name: &str,
        subscription_wallet: &Address,
        txs: &[SubscriptionTx],
    ) -> Result<()> {
        let endpoint = self.transport.endpoint(SUBSCRIBE);
        let body = to_body(&SubscribeRequest {
            user,
            community_name,
            subscription_wallet,
            txs,
        })?;
        let _ack: Value = self.transport.request(&endpoint, Some(body)).await?;
        Ok(())
    }

    /// Names of the communities the user participates in.
    pub async fn related_communities(&self, user: &Address) -> Result<Vec<String>> {
        let endpoint = self.transport.endpoint(RELATED_COMMUNITIES);
        let body = to_body(&RelatedCommunitiesRequest { user })?;
        let response: RelatedCommunitiesResponse =
            self.transport.request(&endpoint, Some(body)).await?;
        Ok(response.communities)
    }

    pub async fn declare_community(&self, community: &Community) -> Result<()> {
        let endpoint = self.transport.endpoint(DECLARE_COMMUNITY);
        let body = to_body(&DeclareCommunityRequest { community })?;
        let _ack: Value = self.transport.request(&endpoint, Some(body)).await?;
        Ok(())
    }
}

fn to_body<T: Serialize>(request: &T) -> Result<Value> {
    Ok(serde_json::to_value(request)?)
}

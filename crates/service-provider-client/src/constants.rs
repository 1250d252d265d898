/// Versioned API root mounted by the Service Provider.
pub const API_ROOT: &str = "api/v0.1";

/// Address of a Service Provider running locally with its default bind address.
pub const DEFAULT_SERVICE_PROVIDER_URL: &str = "http://127.0.0.1:8080/";

// Endpoint suffixes, appended to `API_ROOT`.
pub const GENESIS_WALLET_ADDRESS: &str = "/genesis_wallet_address";
pub const IS_USER_SUBSCRIBED: &str = "/is_user_subscribed";
pub const GRANTED_TOKENS: &str = "/granted_tokens";
pub const GET_MINTING_SIGNATURE: &str = "/get_minting_signature";
pub const SUBSCRIBE: &str = "/subscribe";
pub const RELATED_COMMUNITIES: &str = "/related_communities";
pub const DECLARE_COMMUNITY: &str = "/declare_community";

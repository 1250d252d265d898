//! Client for the zkSync subscription Service Provider API.
//!
//! The Service Provider grants community tokens, signs minting transfers and
//! tracks user subscriptions. This crate wraps its JSON-over-HTTP API: every
//! call is a single POST whose reply is an envelope carrying either a
//! `result` or an `error`.
//!
//! Wallets, signing and transaction submission are out of scope; the
//! opaque values they produce ([`TransferFrom`], [`SubscriptionTx`]) are
//! passed through unmodified.
//!
//! # Quick example
//!
//! ```no_run
//! use sp_client::{Address, Provider};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), sp_client::ServiceProviderError> {
//! let provider = Provider::new("http://127.0.0.1:8080/")?;
//! let user = Address::from("0x2d5bd7cc0f3fb6ff7c9a2e0e8b7c0dcf2a12e4f1");
//!
//! let status = provider.is_user_subscribed(&user, "TestCommunity").await?;
//! if !status.subscribed {
//!     let granted = provider.granted_tokens(&user, "TestCommunity").await?;
//!     println!("{} {} available to mint", granted.amount, granted.token);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod provider;
pub mod requests;
pub mod responses;
pub mod retry;
pub mod transport;
pub mod types;

pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{Result, ServiceProviderError};
pub use provider::Provider;
pub use responses::*;
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, Routing};
pub use types::*;

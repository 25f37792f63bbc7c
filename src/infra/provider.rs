//! Wallet provider boundary.
//!
//! The provider brokers account access, signing, and transaction broadcast
//! on behalf of the user; this crate only consumes it. It is passed into
//! the panel actions as a capability so tests can substitute a scripted
//! implementation, and its absence is a first-class condition the panel
//! detects and reports.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a provider call, carrying the provider's own
/// message text. Classification into the panel's error taxonomy happens
/// at the action boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Identity of the active network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub chain_id: u64,
    pub name: String,
}

/// A submitted transfer, carrying the transaction hash assigned by the
/// provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransfer {
    pub hash: String,
}

/// A capability authorized to sign and broadcast for one connected
/// account.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Submit a native-currency transfer for signing and broadcast.
    ///
    /// The destination string is forwarded exactly as entered; any format
    /// validation is the provider's concern.
    async fn send_transfer(
        &self,
        to: &str,
        value_wei: u128,
    ) -> Result<PendingTransfer, ProviderError>;
}

/// The injected wallet provider.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account authorization. May prompt the user and can be
    /// declined; returns the authorized addresses in provider order.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Balance of `address` in wei.
    async fn balance_of(&self, address: &str) -> Result<u128, ProviderError>;

    /// Chain id and symbolic name of the active network.
    async fn network(&self) -> Result<NetworkInfo, ProviderError>;

    /// Acquire a signer for the connected account.
    async fn signer(&self) -> Result<Box<dyn Signer>, ProviderError>;
}

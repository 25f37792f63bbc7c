use thiserror::Error;

/// Closed set of failures the panel can surface.
///
/// Every variant carries the underlying message text. All of them are
/// handled the same way: shown once as a blocking notice, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet provider is available in this environment.
    #[error("Please install a wallet provider to use this feature")]
    ProviderMissing,

    /// The account-authorization request failed or was declined.
    #[error("Error connecting to wallet: {0}")]
    AuthorizationFailed(String),

    /// Balance or network lookup failed after authorization.
    #[error("Error reading account data: {0}")]
    QueryFailed(String),

    /// Signer acquisition or transaction submission failed.
    #[error("Error sending transaction: {0}")]
    TransferFailed(String),

    /// A transfer was requested while no account is connected.
    #[error("No account connected")]
    NotConnected,
}

//! The two panel actions.
//!
//! Both receive the wallet provider as an injected parameter instead of
//! reaching into ambient environment state, and both map provider failures
//! into the closed [`WalletError`] taxonomy. Neither retries, and a failed
//! action leaves view state for the caller to keep untouched.

use tracing::info;

use crate::domain::error::WalletError;
use crate::domain::state::Connection;
use crate::domain::units::{self, TRANSFER_AMOUNT_WEI};
use crate::infra::provider::{PendingTransfer, WalletProvider};

/// Request account authorization, then read the first authorized account's
/// balance and the active network's id and name.
///
/// Returns the snapshot to apply to view state. With no provider present
/// this fails with [`WalletError::ProviderMissing`] and performs no
/// further action.
pub async fn connect(provider: Option<&dyn WalletProvider>) -> Result<Connection, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderMissing)?;

    let accounts = provider
        .request_accounts()
        .await
        .map_err(|e| WalletError::AuthorizationFailed(e.to_string()))?;
    let address = accounts
        .into_iter()
        .next()
        .ok_or_else(|| WalletError::AuthorizationFailed("no accounts authorized".to_string()))?;

    let balance = provider
        .balance_of(&address)
        .await
        .map_err(|e| WalletError::QueryFailed(e.to_string()))?;
    let network = provider
        .network()
        .await
        .map_err(|e| WalletError::QueryFailed(e.to_string()))?;

    info!("Connected to {} (chain {})", network.name, network.chain_id);

    Ok(Connection {
        address,
        balance: units::format_coin(balance),
        chain_id: network.chain_id.to_string(),
        network: network.name,
    })
}

/// Submit a transfer of exactly 0.01 native units to `to`.
///
/// The destination string is forwarded as-is, empty or not. The connected
/// precondition is checked here rather than left to disabled-control
/// gating in the UI, so correctness does not depend on view wiring.
pub async fn transfer(
    provider: Option<&dyn WalletProvider>,
    connected: bool,
    to: &str,
) -> Result<PendingTransfer, WalletError> {
    let provider = provider.ok_or(WalletError::ProviderMissing)?;
    if !connected {
        return Err(WalletError::NotConnected);
    }

    let signer = provider
        .signer()
        .await
        .map_err(|e| WalletError::TransferFailed(e.to_string()))?;
    let pending = signer
        .send_transfer(to, TRANSFER_AMOUNT_WEI)
        .await
        .map_err(|e| WalletError::TransferFailed(e.to_string()))?;

    info!("Transaction sent: {}", pending.hash);

    Ok(pending)
}

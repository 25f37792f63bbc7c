//! End-to-end tests for the panel actions against a scripted provider.
//!
//! The provider is injected into the actions, so these tests substitute a
//! fake for the JSON-RPC implementation and drive the full
//! connect/transfer flow without a node.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ethpanel::domain::actions;
use ethpanel::domain::error::WalletError;
use ethpanel::domain::state::PanelState;
use ethpanel::domain::units::parse_coin;
use ethpanel::infra::provider::{
    NetworkInfo, PendingTransfer, ProviderError, Signer, WalletProvider,
};

/// Scripted stand-in for the injected wallet provider.
struct FakeProvider {
    accounts: Result<Vec<String>, ProviderError>,
    balance: Result<u128, ProviderError>,
    network: Result<NetworkInfo, ProviderError>,
    submit: Result<String, ProviderError>,
    /// (destination, wei) pairs this provider was asked to broadcast.
    sent: Arc<Mutex<Vec<(String, u128)>>>,
}

impl FakeProvider {
    /// A provider with one authorized account holding 1.5 native units.
    fn with_network(name: &str, chain_id: u64) -> Self {
        Self {
            accounts: Ok(vec!["0xABC".to_string()]),
            balance: Ok(parse_coin("1.5").unwrap()),
            network: Ok(NetworkInfo {
                chain_id,
                name: name.to_string(),
            }),
            submit: Ok("0x123".to_string()),
            sent: Arc::default(),
        }
    }

    fn sent(&self) -> Vec<(String, u128)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for FakeProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.accounts.clone()
    }

    async fn balance_of(&self, _address: &str) -> Result<u128, ProviderError> {
        self.balance.clone()
    }

    async fn network(&self) -> Result<NetworkInfo, ProviderError> {
        self.network.clone()
    }

    async fn signer(&self) -> Result<Box<dyn Signer>, ProviderError> {
        Ok(Box::new(FakeSigner {
            submit: self.submit.clone(),
            sent: self.sent.clone(),
        }))
    }
}

struct FakeSigner {
    submit: Result<String, ProviderError>,
    sent: Arc<Mutex<Vec<(String, u128)>>>,
}

#[async_trait]
impl Signer for FakeSigner {
    async fn send_transfer(
        &self,
        to: &str,
        value_wei: u128,
    ) -> Result<PendingTransfer, ProviderError> {
        let hash = self.submit.clone()?;
        self.sent.lock().unwrap().push((to.to_string(), value_wei));
        Ok(PendingTransfer { hash })
    }
}

/// Apply a successful transfer to view state the way the app does.
fn apply_transfer(state: &mut PanelState, pending: &PendingTransfer) {
    state.message = format!("Transaction sent: {}", pending.hash);
}

#[tokio::test]
async fn missing_provider_produces_install_notice_and_nothing_else() {
    let state = PanelState::default();

    let err = actions::connect(None).await.unwrap_err();
    assert_eq!(err, WalletError::ProviderMissing);
    assert!(err.to_string().contains("install"));

    let err = actions::transfer(None, state.is_connected(), "0xDEF")
        .await
        .unwrap_err();
    assert_eq!(err, WalletError::ProviderMissing);

    assert_eq!(state, PanelState::default());
}

#[tokio::test]
async fn connect_populates_state_and_eth_unit_label() {
    let provider = FakeProvider::with_network("homestead", 1);
    let conn = actions::connect(Some(&provider)).await.unwrap();

    let mut state = PanelState::default();
    state.apply_connection(conn);

    assert_eq!(state.address.as_deref(), Some("0xABC"));
    assert_eq!(state.balance.as_deref(), Some("1.5"));
    assert_eq!(state.chain_id.as_deref(), Some("1"));
    assert_eq!(state.network.as_deref(), Some("homestead"));
    assert_eq!(state.balance_line("homestead", "ETH"), "1.5 ETH");
    assert_eq!(state.balance_line("bsc-mainnet", "BNB"), "1.5 (homestead)");
}

#[tokio::test]
async fn bnb_unit_label_on_bsc_mainnet() {
    let provider = FakeProvider::with_network("bsc-mainnet", 56);
    let mut state = PanelState::default();
    state.apply_connection(actions::connect(Some(&provider)).await.unwrap());

    assert_eq!(state.balance_line("bsc-mainnet", "BNB"), "1.5 BNB");
    assert_eq!(state.balance_line("homestead", "ETH"), "1.5 (bsc-mainnet)");
}

#[tokio::test]
async fn other_networks_render_raw_name_on_both_lines() {
    let provider = FakeProvider::with_network("sepolia", 11155111);
    let mut state = PanelState::default();
    state.apply_connection(actions::connect(Some(&provider)).await.unwrap());

    assert_eq!(state.balance_line("homestead", "ETH"), "1.5 (sepolia)");
    assert_eq!(state.balance_line("bsc-mainnet", "BNB"), "1.5 (sepolia)");
}

#[tokio::test]
async fn transfer_submits_fixed_amount_and_reports_hash() {
    let provider = FakeProvider::with_network("homestead", 1);
    let mut state = PanelState::default();
    state.apply_connection(actions::connect(Some(&provider)).await.unwrap());

    let pending = actions::transfer(Some(&provider), state.is_connected(), "0xDEF")
        .await
        .unwrap();
    apply_transfer(&mut state, &pending);

    // Exactly one submission, of exactly 0.01 units, to the entered string.
    assert_eq!(
        provider.sent(),
        vec![("0xDEF".to_string(), 10_000_000_000_000_000)]
    );
    assert!(state.message.contains("0x123"));
}

#[tokio::test]
async fn empty_destination_is_forwarded_as_is() {
    let provider = FakeProvider::with_network("homestead", 1);
    let pending = actions::transfer(Some(&provider), true, "").await.unwrap();

    assert_eq!(pending.hash, "0x123");
    assert_eq!(provider.sent(), vec![(String::new(), 10_000_000_000_000_000)]);
}

#[tokio::test]
async fn failed_submission_surfaces_message_and_keeps_prior_text() {
    let mut provider = FakeProvider::with_network("homestead", 1);
    provider.submit = Err(ProviderError::new("insufficient funds"));

    let mut state = PanelState::default();
    state.apply_connection(actions::connect(Some(&provider)).await.unwrap());
    state.message = "Transaction sent: 0xAAA".to_string();

    let err = actions::transfer(Some(&provider), state.is_connected(), "0xDEF")
        .await
        .unwrap_err();

    assert!(matches!(err, WalletError::TransferFailed(_)));
    assert!(err.to_string().contains("insufficient funds"));
    // The notice carries the failure; the message field is untouched.
    assert_eq!(state.message, "Transaction sent: 0xAAA");
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn transfer_requires_a_connected_account() {
    let provider = FakeProvider::with_network("homestead", 1);
    let err = actions::transfer(Some(&provider), false, "0xDEF")
        .await
        .unwrap_err();

    assert_eq!(err, WalletError::NotConnected);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn rejected_authorization_maps_to_authorization_failed() {
    let mut provider = FakeProvider::with_network("homestead", 1);
    provider.accounts = Err(ProviderError::new("user rejected the request"));

    let err = actions::connect(Some(&provider)).await.unwrap_err();
    assert!(matches!(err, WalletError::AuthorizationFailed(_)));
    assert!(err.to_string().contains("user rejected the request"));
}

#[tokio::test]
async fn empty_account_list_is_an_authorization_failure() {
    let mut provider = FakeProvider::with_network("homestead", 1);
    provider.accounts = Ok(vec![]);

    let err = actions::connect(Some(&provider)).await.unwrap_err();
    assert!(matches!(err, WalletError::AuthorizationFailed(_)));
}

#[tokio::test]
async fn failed_balance_query_maps_to_query_failed() {
    let mut provider = FakeProvider::with_network("homestead", 1);
    provider.balance = Err(ProviderError::new("connection reset"));

    let err = actions::connect(Some(&provider)).await.unwrap_err();
    assert!(matches!(err, WalletError::QueryFailed(_)));
    assert!(err.to_string().contains("connection reset"));
}

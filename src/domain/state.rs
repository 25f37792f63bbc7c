//! Transient view state for the wallet panel.
//!
//! One in-memory record, local to the single rendered panel instance.
//! Nothing here is persisted; the record lives for the process lifetime.

use serde::{Deserialize, Serialize};

/// Values read from the provider on a successful connection, applied to
/// view state as one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub address: String,
    pub balance: String,
    pub chain_id: String,
    pub network: String,
}

/// View state of the panel.
///
/// `address` is present iff a connection has succeeded; there is no
/// disconnect operation, so once set it persists for the session. A failed
/// action leaves the record untouched, and the view tolerates any field
/// other than `address` being absent or stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelState {
    pub address: Option<String>,
    pub balance: Option<String>,
    pub chain_id: Option<String>,
    pub network: Option<String>,
    /// Last transaction-submission status text.
    pub message: String,
}

impl PanelState {
    /// Whether a connection has succeeded. The send control's enablement
    /// is exactly this predicate.
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Apply a successful connection. This is the only transition out of
    /// the disconnected state and there is no reverse.
    pub fn apply_connection(&mut self, conn: Connection) {
        self.address = Some(conn.address);
        self.balance = Some(conn.balance);
        self.chain_id = Some(conn.chain_id);
        self.network = Some(conn.network);
    }

    /// Balance line for a network whose native unit is `unit`.
    ///
    /// Shows `unit` when the active network matches `expected_network`,
    /// otherwise falls back to the raw network name in parentheses.
    pub fn balance_line(&self, expected_network: &str, unit: &str) -> String {
        let balance = self.balance.as_deref().unwrap_or("");
        let network = self.network.as_deref().unwrap_or("");
        if network == expected_network {
            format!("{balance} {unit}")
        } else {
            format!("{balance} ({network})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> PanelState {
        let mut state = PanelState::default();
        state.apply_connection(Connection {
            address: "0xABC".to_string(),
            balance: "1.5".to_string(),
            chain_id: "1".to_string(),
            network: "homestead".to_string(),
        });
        state
    }

    #[test]
    fn test_default_is_disconnected() {
        let state = PanelState::default();
        assert!(!state.is_connected());
        assert_eq!(state.message, "");
    }

    #[test]
    fn test_apply_connection_sets_all_fields() {
        let state = connected();
        assert!(state.is_connected());
        assert_eq!(state.address.as_deref(), Some("0xABC"));
        assert_eq!(state.balance.as_deref(), Some("1.5"));
        assert_eq!(state.chain_id.as_deref(), Some("1"));
        assert_eq!(state.network.as_deref(), Some("homestead"));
    }

    #[test]
    fn test_balance_line_matching_network_shows_unit() {
        let state = connected();
        assert_eq!(state.balance_line("homestead", "ETH"), "1.5 ETH");
        assert_eq!(state.balance_line("bsc-mainnet", "BNB"), "1.5 (homestead)");
    }

    #[test]
    fn test_balance_line_other_network_shows_raw_name() {
        let mut state = connected();
        state.network = Some("sepolia".to_string());
        assert_eq!(state.balance_line("homestead", "ETH"), "1.5 (sepolia)");
        assert_eq!(state.balance_line("bsc-mainnet", "BNB"), "1.5 (sepolia)");
    }

    #[test]
    fn test_balance_line_tolerates_absent_fields() {
        let mut state = PanelState::default();
        state.address = Some("0xABC".to_string());
        assert_eq!(state.balance_line("homestead", "ETH"), " ()");
    }
}

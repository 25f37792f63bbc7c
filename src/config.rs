use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    if let Ok(s) = std::env::var("ETHPANEL_DATA") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "ethpanel", "ethpanel") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Get the config directory for the application.
pub fn get_config_dir() -> PathBuf {
    if let Ok(s) = std::env::var("ETHPANEL_CONFIG") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "ethpanel", "ethpanel") {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    /// JSON-RPC endpoint of the wallet provider. `None` means no provider
    /// is available in this environment; the panel reports that instead of
    /// treating it as an error path.
    pub rpc_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::homestead()
    }
}

impl Config {
    /// Create config from CLI args.
    pub fn new(network: Option<&str>, rpc_url: Option<&str>) -> Self {
        let mut config = match network {
            Some(name) => Self::from_network(name),
            None => Self::default(),
        };
        if let Some(url) = rpc_url {
            config.network.rpc_url = Some(url.to_string());
        }
        config
    }

    pub fn homestead() -> Self {
        Self {
            network: NetworkConfig {
                name: "homestead".to_string(),
                rpc_url: Some("https://cloudflare-eth.com".to_string()),
            },
        }
    }

    pub fn bsc_mainnet() -> Self {
        Self {
            network: NetworkConfig {
                name: "bsc-mainnet".to_string(),
                rpc_url: Some("https://bsc-dataseed.binance.org".to_string()),
            },
        }
    }

    /// A network with no known provider endpoint; one must be supplied via
    /// `--rpc-url` or the panel reports the provider as missing.
    pub fn custom(name: &str) -> Self {
        Self {
            network: NetworkConfig {
                name: name.to_string(),
                rpc_url: None,
            },
        }
    }

    pub fn from_network(network: &str) -> Self {
        match network {
            "homestead" | "mainnet" => Self::homestead(),
            "bsc-mainnet" | "bsc" => Self::bsc_mainnet(),
            other => Self::custom(other),
        }
    }
}

/// Canonical network names by chain id, after the ethers network registry
/// the original front-end relied on for `homestead` and `bsc-mainnet`.
pub fn network_name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some("homestead"),
        10 => Some("optimism"),
        56 => Some("bsc-mainnet"),
        137 => Some("matic"),
        8453 => Some("base"),
        11155111 => Some("sepolia"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_network_presets() {
        assert_eq!(Config::from_network("homestead").network.name, "homestead");
        assert_eq!(Config::from_network("mainnet").network.name, "homestead");
        assert_eq!(Config::from_network("bsc").network.name, "bsc-mainnet");
        assert!(Config::from_network("homestead").network.rpc_url.is_some());
    }

    #[test]
    fn test_unknown_network_has_no_provider() {
        let config = Config::from_network("localnet");
        assert_eq!(config.network.name, "localnet");
        assert!(config.network.rpc_url.is_none());
    }

    #[test]
    fn test_rpc_url_override() {
        let config = Config::new(Some("localnet"), Some("http://127.0.0.1:8545"));
        assert_eq!(
            config.network.rpc_url.as_deref(),
            Some("http://127.0.0.1:8545")
        );
    }

    #[test]
    fn test_network_name_table() {
        assert_eq!(network_name(1), Some("homestead"));
        assert_eq!(network_name(56), Some("bsc-mainnet"));
        assert_eq!(network_name(31337), None);
    }
}

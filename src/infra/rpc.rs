//! Ethereum JSON-RPC implementation of the wallet provider boundary.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{Config, network_name};
use crate::infra::provider::{
    NetworkInfo, PendingTransfer, ProviderError, Signer, WalletProvider,
};

/// Wallet provider backed by an Ethereum-compatible JSON-RPC node.
pub struct RpcProvider {
    client: Client,
    url: String,
    /// Network name to report when the chain id is not in the registry.
    fallback_name: String,
}

impl RpcProvider {
    pub fn new(url: &str, fallback_name: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            fallback_name: fallback_name.to_string(),
        }
    }

    /// Build a provider from config if one is configured there. `None` is
    /// the provider-missing condition the panel surfaces to the user.
    pub fn detect(config: &Config) -> Option<Self> {
        config
            .network
            .rpc_url
            .as_deref()
            .map(|url| Self::new(url, &config.network.name))
    }

    /// Get the RPC URL.
    pub fn rpc_url(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        rpc_call(&self.client, &self.url, method, params).await
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

async fn rpc_call(
    client: &Client,
    url: &str,
    method: &str,
    params: Value,
) -> Result<Value, ProviderError> {
    debug!("rpc call: {}", method);
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    });

    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(|e| ProviderError(e.to_string()))?;
    let response: RpcResponse = response
        .json()
        .await
        .map_err(|e| ProviderError(e.to_string()))?;

    if let Some(err) = response.error {
        return Err(ProviderError(format!("{} (code {})", err.message, err.code)));
    }
    response
        .result
        .ok_or_else(|| ProviderError::new("empty rpc response"))
}

/// Decode a 0x-prefixed hex quantity.
fn decode_quantity(value: &Value) -> Result<u128, ProviderError> {
    let s = value
        .as_str()
        .ok_or_else(|| ProviderError::new("expected hex quantity"))?;
    let digits = s.strip_prefix("0x").unwrap_or(s);
    u128::from_str_radix(digits, 16)
        .map_err(|e| ProviderError(format!("invalid hex quantity {s:?}: {e}")))
}

/// Encode a wei amount as a 0x-prefixed hex quantity.
fn encode_quantity(value: u128) -> String {
    format!("{value:#x}")
}

#[async_trait]
impl WalletProvider for RpcProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let result = self.call("eth_accounts", json!([])).await?;
        let accounts = result
            .as_array()
            .ok_or_else(|| ProviderError::new("expected account list"))?;
        accounts
            .iter()
            .map(|a| {
                a.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ProviderError::new("expected account address string"))
            })
            .collect()
    }

    async fn balance_of(&self, address: &str) -> Result<u128, ProviderError> {
        let result = self
            .call("eth_getBalance", json!([address, "latest"]))
            .await?;
        decode_quantity(&result)
    }

    async fn network(&self) -> Result<NetworkInfo, ProviderError> {
        let result = self.call("eth_chainId", json!([])).await?;
        let chain_id = decode_quantity(&result)? as u64;
        let name = network_name(chain_id)
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_name.clone());
        Ok(NetworkInfo { chain_id, name })
    }

    async fn signer(&self) -> Result<Box<dyn Signer>, ProviderError> {
        let from = self
            .request_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::new("no accounts authorized"))?;
        Ok(Box::new(RpcSigner {
            client: self.client.clone(),
            url: self.url.clone(),
            from,
        }))
    }
}

/// Signer for one account on an unlocked JSON-RPC node; the node holds the
/// key and does the actual signing.
struct RpcSigner {
    client: Client,
    url: String,
    from: String,
}

#[async_trait]
impl Signer for RpcSigner {
    async fn send_transfer(
        &self,
        to: &str,
        value_wei: u128,
    ) -> Result<PendingTransfer, ProviderError> {
        let tx = json!({
            "from": self.from,
            "to": to,
            "value": encode_quantity(value_wei),
        });
        let result = rpc_call(&self.client, &self.url, "eth_sendTransaction", json!([tx])).await?;
        let hash = result
            .as_str()
            .ok_or_else(|| ProviderError::new("expected transaction hash"))?;
        Ok(PendingTransfer {
            hash: hash.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quantity() {
        assert_eq!(decode_quantity(&json!("0x0")).unwrap(), 0);
        assert_eq!(decode_quantity(&json!("0x38")).unwrap(), 56);
        assert_eq!(
            decode_quantity(&json!("0x14d1120d7b160000")).unwrap(),
            1_500_000_000_000_000_000
        );
        assert!(decode_quantity(&json!("zz")).is_err());
        assert!(decode_quantity(&json!(12)).is_err());
    }

    #[test]
    fn test_encode_quantity() {
        assert_eq!(encode_quantity(0), "0x0");
        assert_eq!(encode_quantity(10_000_000_000_000_000), "0x2386f26fc10000");
    }

    #[test]
    fn test_detect_requires_configured_endpoint() {
        assert!(RpcProvider::detect(&Config::homestead()).is_some());
        assert!(RpcProvider::detect(&Config::custom("localnet")).is_none());
    }
}

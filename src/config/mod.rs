//! Configuration for the message board

pub mod rpc;

use crate::{Error, Result};
use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Re-export RPC config
pub use rpc::RpcConfig;

/// Private key environment variable used by the original deployment scripts
pub const ACCOUNT_PRIVATE_KEY_ENV: &str = "ACCOUNT_PRIVATE_KEY";

/// Fallback private key environment variable
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Address the `MessageStorage` contract was deployed to on Sepolia
pub const DEFAULT_CONTRACT_ADDRESS: Address = address!("921cf7dEe0FfbD1f2A727F7E587668e6424A195e");

/// Supported networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Sepolia,
    /// Local development node (anvil / hardhat)
    Localhost,
}

impl Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11_155_111,
            Network::Localhost => 31_337,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Sepolia => "sepolia",
            Network::Localhost => "localhost",
        }
    }
}

impl std::str::FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" | "ethereum" => Ok(Network::Mainnet),
            "sepolia" => Ok(Network::Sepolia),
            "localhost" | "local" | "anvil" | "hardhat" => Ok(Network::Localhost),
            other => Err(Error::Config(format!("Unknown network: {}", other))),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Deployed `MessageStorage` contract
    #[serde(default = "default_contract_address")]
    pub contract_address: Address,
    /// Network the contract lives on
    #[serde(default)]
    pub network: Network,
    /// Blocks to wait for after a `setMessage` transaction is mined
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,
    /// Path to the activity log file (JSONL)
    #[serde(default)]
    pub activity_log_path: Option<String>,
}

fn default_contract_address() -> Address {
    DEFAULT_CONTRACT_ADDRESS
}

fn default_confirmations() -> u64 {
    1
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config {}: {}", path.display(), e)))?;

        if config.confirmations == 0 {
            return Err(Error::Config(
                "confirmations must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            network: Network::default(),
            confirmations: default_confirmations(),
            activity_log_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_deserialize_defaults() {
        let parsed: Config = serde_json::from_value(serde_json::json!({})).expect("parse config");
        assert_eq!(parsed.contract_address, DEFAULT_CONTRACT_ADDRESS);
        assert_eq!(parsed.network, Network::Sepolia);
        assert_eq!(parsed.confirmations, 1);
        assert!(parsed.activity_log_path.is_none());
    }

    #[test]
    fn config_deserialize_explicit() {
        let value = serde_json::json!({
            "contract_address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "network": "localhost",
            "confirmations": 3,
            "activity_log_path": "activity.jsonl"
        });
        let parsed: Config = serde_json::from_value(value).expect("parse config");
        assert_eq!(
            parsed.contract_address,
            address!("5FbDB2315678afecb367f032d93F642f64180aa3")
        );
        assert_eq!(parsed.network, Network::Localhost);
        assert_eq!(parsed.network.chain_id(), 31_337);
        assert_eq!(parsed.confirmations, 3);
        assert_eq!(parsed.activity_log_path.as_deref(), Some("activity.jsonl"));
    }

    #[test]
    fn load_rejects_zero_confirmations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"confirmations": 0}}"#).unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"network": "mainnet"}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.contract_address, DEFAULT_CONTRACT_ADDRESS);
    }

    #[test]
    fn network_from_str() {
        assert_eq!("Sepolia".parse::<Network>().unwrap(), Network::Sepolia);
        assert_eq!("anvil".parse::<Network>().unwrap(), Network::Localhost);
        assert!("goerli".parse::<Network>().is_err());
    }
}

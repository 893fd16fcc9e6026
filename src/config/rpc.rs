//! RPC endpoint configuration
//!
//! Resolution order, first match wins:
//! 1. `RPC_URL` - explicit endpoint
//! 2. `ALCHEMY_HTTP_URL` - full Alchemy URL, as used by the deployment scripts
//! 3. `ALCHEMY_API_KEY` - builds the Alchemy URL for the selected network
//! 4. Public RPC fallback - for testing only
//!
//! # Examples
//!
//! ```bash
//! export ALCHEMY_HTTP_URL="https://eth-sepolia.g.alchemy.com/v2/YOUR_KEY"
//! message-board get
//! ```

use super::Network;
use crate::{Error, Result};
use url::Url;

/// Environment variable names
mod env_vars {
    pub const RPC_URL: &str = "RPC_URL";
    pub const ALCHEMY_HTTP_URL: &str = "ALCHEMY_HTTP_URL";
    pub const ALCHEMY_API_KEY: &str = "ALCHEMY_API_KEY";
}

/// Public RPC endpoints (rate limited, for testing only)
mod public_rpcs {
    pub const MAINNET: &str = "https://eth.llamarpc.com";
    pub const SEPOLIA: &str = "https://ethereum-sepolia-rpc.publicnode.com";
    pub const LOCALHOST: &str = "http://127.0.0.1:8545";
}

/// RPC endpoint for the configured network
#[derive(Debug, Clone)]
pub struct RpcConfig {
    network: Network,
    url: String,
}

impl RpcConfig {
    /// Resolve the RPC URL from environment variables
    pub fn from_env(network: Network) -> Self {
        Self::from_lookup(network, |name| std::env::var(name).ok())
    }

    /// Resolve the RPC URL using `lookup` in place of the process environment
    pub fn from_lookup(network: Network, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(env_vars::RPC_URL) {
            tracing::debug!("Using RPC_URL");
            return Self { network, url };
        }

        if let Some(url) = lookup(env_vars::ALCHEMY_HTTP_URL) {
            tracing::debug!("Using ALCHEMY_HTTP_URL");
            return Self { network, url };
        }

        if let Some(key) = lookup(env_vars::ALCHEMY_API_KEY) {
            if let Some(url) = alchemy_url(network, &key) {
                tracing::info!(network = network.name(), "Building RPC URL from ALCHEMY_API_KEY");
                return Self { network, url };
            }
        }

        let url = match network {
            Network::Mainnet => public_rpcs::MAINNET,
            Network::Sepolia => public_rpcs::SEPOLIA,
            Network::Localhost => public_rpcs::LOCALHOST,
        };
        if network != Network::Localhost {
            tracing::warn!(
                network = network.name(),
                "No RPC configured, using public RPC (rate limited)"
            );
        }

        Self {
            network,
            url: url.to_string(),
        }
    }

    /// Create with an explicit RPC URL
    pub fn with_url(network: Network, url: impl Into<String>) -> Self {
        Self {
            network,
            url: url.into(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Raw URL string
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse the URL for use with alloy's HTTP transport
    pub fn parsed_url(&self) -> Result<Url> {
        self.url
            .parse()
            .map_err(|e| Error::Config(format!("Invalid RPC URL {}: {}", self.url, e)))
    }
}

fn alchemy_url(network: Network, key: &str) -> Option<String> {
    match network {
        Network::Mainnet => Some(format!("https://eth-mainnet.g.alchemy.com/v2/{}", key)),
        Network::Sepolia => Some(format!("https://eth-sepolia.g.alchemy.com/v2/{}", key)),
        Network::Localhost => None,
    }
}

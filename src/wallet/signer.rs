//! Local key-backed wallet
//!
//! SECURITY: the private key lives only here.
//! - Read from the environment into a `SecretString`
//! - Held in alloy's `PrivateKeySigner` afterwards
//! - Never serialized, never logged

use super::provider::{AccountSigner, WalletProvider};
use crate::config::{ACCOUNT_PRIVATE_KEY_ENV, PRIVATE_KEY_ENV};
use crate::{Error, Result};
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Wallet provider backed by a locally held private key
///
/// The key is authorized up front, so account requests always succeed with
/// the single account it controls.
pub struct LocalWallet {
    signer: PrivateKeySigner,
    address: Address,
}

impl LocalWallet {
    /// Create a wallet from `ACCOUNT_PRIVATE_KEY`, falling back to `PRIVATE_KEY`
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(ACCOUNT_PRIVATE_KEY_ENV)
            .or_else(|_| std::env::var(PRIVATE_KEY_ENV))
            .map_err(|_| {
                Error::Wallet(format!(
                    "Neither {} nor {} is set",
                    ACCOUNT_PRIVATE_KEY_ENV, PRIVATE_KEY_ENV
                ))
            })?;

        Self::from_secret(&SecretString::from(key))
    }

    /// Create a wallet from a hex-encoded private key, with or without `0x`
    pub fn from_secret(key: &SecretString) -> Result<Self> {
        let key_hex = key.expose_secret().trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| Error::Wallet(format!("Invalid private key: {}", e)))?;
        let address = signer.address();

        Ok(Self { signer, address })
    }

    /// Public address (safe to share)
    pub fn address(&self) -> Address {
        self.address
    }
}

#[async_trait]
impl WalletProvider for LocalWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        tracing::debug!(address = %self.address, "Account access granted");
        Ok(vec![self.address])
    }

    async fn signer(&self) -> Result<AccountSigner> {
        Ok(AccountSigner::new(self.signer.clone()))
    }
}

// Implement Debug manually to avoid exposing the signer
impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address)
            .field("signer", &"[REDACTED]")
            .finish()
    }
}

use crate::{Error, Result};
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use std::sync::Arc;

/// An injected wallet: grants account access and hands out signers.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for account access (`eth_requestAccounts`).
    ///
    /// Fails if the user rejects the permission request.
    async fn request_accounts(&self) -> Result<Vec<Address>>;

    /// A signer bound to the currently selected account.
    async fn signer(&self) -> Result<AccountSigner>;
}

/// Signing capability for one account
#[derive(Clone)]
pub struct AccountSigner {
    address: Address,
    wallet: EthereumWallet,
}

impl AccountSigner {
    pub fn new(signer: PrivateKeySigner) -> Self {
        let address = signer.address();
        Self {
            address,
            wallet: EthereumWallet::from(signer),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Wallet for use with alloy providers
    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }
}

impl std::fmt::Debug for AccountSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountSigner")
            .field("address", &self.address)
            .field("wallet", &"[REDACTED]")
            .finish()
    }
}

/// Adapter between the form and the injected wallet
///
/// Every call to [`WalletBridge::acquire`] issues a fresh account request;
/// nothing is cached and nothing is retried.
#[derive(Clone, Default)]
pub struct WalletBridge {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletBridge {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    /// Bridge with no wallet injected
    pub fn disconnected() -> Self {
        Self { provider: None }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// Request account access and return a signer for the selected account.
    pub async fn acquire(&self) -> Result<AccountSigner> {
        let provider = self.provider.as_ref().ok_or(Error::WalletNotFound)?;

        let accounts = provider.request_accounts().await?;
        if accounts.is_empty() {
            return Err(Error::Wallet("No account authorized".to_string()));
        }

        let signer = provider.signer().await?;
        if !accounts.contains(&signer.address()) {
            return Err(Error::Wallet(format!(
                "Signer account {} was not authorized",
                signer.address()
            )));
        }

        tracing::debug!(address = %signer.address(), "Acquired signer");
        Ok(signer)
    }
}

impl std::fmt::Debug for WalletBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletBridge")
            .field("available", &self.is_available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Test private key (DO NOT use in production!)
    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const OTHER_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    struct StubWallet {
        accounts: Vec<Address>,
        signer_key: &'static str,
        reject: bool,
        requests: AtomicUsize,
    }

    impl StubWallet {
        fn new(accounts: Vec<Address>, signer_key: &'static str) -> Self {
            Self {
                accounts,
                signer_key,
                reject: false,
                requests: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WalletProvider for StubWallet {
        async fn request_accounts(&self) -> Result<Vec<Address>> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            if self.reject {
                return Err(Error::Wallet("User rejected the request".to_string()));
            }
            Ok(self.accounts.clone())
        }

        async fn signer(&self) -> Result<AccountSigner> {
            let signer: PrivateKeySigner = self.signer_key.parse().unwrap();
            Ok(AccountSigner::new(signer))
        }
    }

    fn address_of(key: &str) -> Address {
        key.parse::<PrivateKeySigner>().unwrap().address()
    }

    #[tokio::test]
    async fn test_missing_wallet() {
        let bridge = WalletBridge::disconnected();
        assert!(!bridge.is_available());
        assert!(matches!(bridge.acquire().await, Err(Error::WalletNotFound)));
    }

    #[tokio::test]
    async fn test_acquire_requests_every_time() {
        let wallet = Arc::new(StubWallet::new(vec![address_of(TEST_KEY)], TEST_KEY));
        let bridge = WalletBridge::new(Some(wallet.clone()));

        let signer = bridge.acquire().await.unwrap();
        assert_eq!(signer.address(), address_of(TEST_KEY));
        bridge.acquire().await.unwrap();

        assert_eq!(wallet.requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_rejected_request() {
        let mut wallet = StubWallet::new(vec![address_of(TEST_KEY)], TEST_KEY);
        wallet.reject = true;
        let bridge = WalletBridge::new(Some(Arc::new(wallet)));

        assert!(matches!(bridge.acquire().await, Err(Error::Wallet(_))));
    }

    #[tokio::test]
    async fn test_no_accounts() {
        let bridge = WalletBridge::new(Some(Arc::new(StubWallet::new(vec![], TEST_KEY))));
        assert!(matches!(bridge.acquire().await, Err(Error::Wallet(_))));
    }

    #[tokio::test]
    async fn test_unauthorized_signer() {
        let wallet = StubWallet::new(vec![address_of(TEST_KEY)], OTHER_KEY);
        let bridge = WalletBridge::new(Some(Arc::new(wallet)));

        let err = bridge.acquire().await.unwrap_err();
        assert!(err.to_string().contains("not authorized"));
    }

    #[test]
    fn test_debug_redacts_wallet() {
        let signer = AccountSigner::new(TEST_KEY.parse().unwrap());
        let debug_str = format!("{:?}", signer);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("ac0974bec"));
    }
}

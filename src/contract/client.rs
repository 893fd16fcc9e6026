use super::binding::MessageStorage;
use crate::config::RpcConfig;
use crate::error::EMPTY_MESSAGE;
use crate::wallet::AccountSigner;
use crate::{Error, Result};
use alloy::network::ReceiptResponse;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;
use std::sync::Arc;

/// The remote operations of the message contract
#[async_trait]
pub trait MessageContract: Send + Sync {
    /// Send `setMessage(text)` and wait until the transaction is confirmed.
    async fn set_message(&self, text: &str) -> Result<TxHash>;

    /// Call `getMessage()`.
    async fn get_message(&self) -> Result<String>;
}

/// Binds a signer to a [`MessageContract`]
pub trait ContractConnector: Send + Sync {
    fn connect(&self, signer: AccountSigner) -> Result<Arc<dyn MessageContract>>;
}

/// Reject a message before anything is sent.
pub fn validate_message(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::Validation(EMPTY_MESSAGE.to_string()));
    }
    Ok(())
}

/// Client for a single deployed contract
pub struct ContractClient {
    contract: Arc<dyn MessageContract>,
}

impl ContractClient {
    pub fn new(contract: Arc<dyn MessageContract>) -> Self {
        Self { contract }
    }

    /// Store `text` on chain. Each call is a new transaction.
    pub async fn submit(&self, text: &str) -> Result<TxHash> {
        validate_message(text)?;

        tracing::info!(len = text.len(), "Submitting message");
        let tx_hash = self.contract.set_message(text).await?;
        tracing::info!(%tx_hash, "Message confirmed");

        Ok(tx_hash)
    }

    /// Read the stored message.
    pub async fn retrieve(&self) -> Result<String> {
        tracing::debug!("Retrieving message");
        let message = self.contract.get_message().await?;
        tracing::debug!(len = message.len(), "Message retrieved");

        Ok(message)
    }
}

/// Connector that talks JSON-RPC over HTTP
#[derive(Debug, Clone)]
pub struct RpcConnector {
    rpc: RpcConfig,
    contract_address: Address,
    confirmations: u64,
}

impl RpcConnector {
    pub fn new(rpc: RpcConfig, contract_address: Address, confirmations: u64) -> Self {
        Self {
            rpc,
            contract_address,
            confirmations,
        }
    }
}

impl ContractConnector for RpcConnector {
    fn connect(&self, signer: AccountSigner) -> Result<Arc<dyn MessageContract>> {
        let url = self.rpc.parsed_url()?;

        let provider = ProviderBuilder::new()
            .wallet(signer.wallet().clone())
            .connect_http(url)
            .erased();

        tracing::debug!(
            network = self.rpc.network().name(),
            contract = %self.contract_address,
            from = %signer.address(),
            "Connected contract client"
        );

        Ok(Arc::new(OnchainMessageContract {
            contract: MessageStorage::new(self.contract_address, provider),
            from: signer.address(),
            confirmations: self.confirmations,
        }))
    }
}

/// `MessageStorage` reached through a signer-backed provider
pub struct OnchainMessageContract {
    contract: MessageStorage::MessageStorageInstance<DynProvider>,
    from: Address,
    confirmations: u64,
}

#[async_trait]
impl MessageContract for OnchainMessageContract {
    async fn set_message(&self, text: &str) -> Result<TxHash> {
        let pending = self
            .contract
            .setMessage(text.to_string())
            .from(self.from)
            .send()
            .await
            .map_err(|e| Error::Transaction(format!("Failed to send setMessage: {}", e)))?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(%tx_hash, confirmations = self.confirmations, "Transaction sent, waiting for receipt");

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| Error::Transaction(format!("Failed to confirm {}: {}", tx_hash, e)))?;

        ensure_succeeded(tx_hash, &receipt)
    }

    async fn get_message(&self) -> Result<String> {
        self.contract
            .getMessage()
            .from(self.from)
            .call()
            .await
            .map_err(|e| Error::Read(format!("getMessage call failed: {}", e)))
    }
}

/// A mined transaction whose receipt reports failure is an error.
fn ensure_succeeded(tx_hash: TxHash, receipt: &impl ReceiptResponse) -> Result<TxHash> {
    if !receipt.status() {
        return Err(Error::Transaction(format!("Transaction {} reverted", tx_hash)));
    }
    Ok(tx_hash)
}

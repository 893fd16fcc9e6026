use super::notify::{ConsoleNotifier, Notification, Notifier, MESSAGE_RETRIEVED, MESSAGE_SET};
use super::state::FormState;
use super::view::FormView;
use crate::activity_log::{ActivityEntry, ActivityLog};
use crate::contract::{validate_message, ContractClient, ContractConnector};
use crate::error::Operation;
use crate::wallet::WalletBridge;
use crate::Result;
use alloy::primitives::TxHash;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Result of one handler invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(TxHash),
    Retrieved(String),
    /// The failure was recorded in the form's error text
    Failed,
    /// An operation of the same kind was already in flight
    Busy,
}

impl Outcome {
    /// The operation ran and the contract call succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Submitted(_) | Outcome::Retrieved(_))
    }
}

/// The message form and its two handlers
///
/// State is locked only for transitions, never across a wallet or contract
/// call, so a submit and a retrieve can be in flight at the same time.
pub struct MessageApp {
    state: Arc<RwLock<FormState>>,
    bridge: WalletBridge,
    connector: Arc<dyn ContractConnector>,
    notifier: Arc<dyn Notifier>,
    activity_log: Option<ActivityLog>,
}

impl MessageApp {
    pub fn new(bridge: WalletBridge, connector: Arc<dyn ContractConnector>) -> Self {
        Self {
            state: Arc::new(RwLock::new(FormState::default())),
            bridge,
            connector,
            notifier: Arc::new(ConsoleNotifier),
            activity_log: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_activity_log(mut self, log: ActivityLog) -> Self {
        self.activity_log = Some(log);
        self
    }

    /// Replace the draft (the text input's change event)
    pub async fn set_draft(&self, text: impl Into<String>) {
        self.state.write().await.draft = text.into();
    }

    pub async fn snapshot(&self) -> FormState {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> FormView {
        FormView::from(&*self.state.read().await)
    }

    /// Submit the current draft.
    pub async fn send_message(&self) -> Outcome {
        let draft = {
            let mut state = self.state.write().await;
            if !state.begin(Operation::Submit) {
                return Outcome::Busy;
            }
            state.draft.clone()
        };

        let started = Instant::now();
        match self.submit(&draft).await {
            Ok(tx_hash) => {
                self.state.write().await.submit_succeeded();
                info!(%tx_hash, "Message set");
                self.notifier.notify(Notification::success(MESSAGE_SET));
                self.record(ActivityEntry::success(
                    Operation::Submit,
                    Some(tx_hash),
                    elapsed_ms(started),
                ))
                .await;
                Outcome::Submitted(tx_hash)
            }
            Err(e) => {
                self.fail(Operation::Submit, e, started).await;
                Outcome::Failed
            }
        }
    }

    /// Read the stored message into the form.
    pub async fn get_message(&self) -> Outcome {
        if !self.state.write().await.begin(Operation::Retrieve) {
            return Outcome::Busy;
        }

        let started = Instant::now();
        match self.retrieve().await {
            Ok(message) => {
                self.state
                    .write()
                    .await
                    .retrieve_succeeded(message.clone());
                self.notifier.notify(Notification::success(MESSAGE_RETRIEVED));
                self.record(ActivityEntry::success(
                    Operation::Retrieve,
                    None,
                    elapsed_ms(started),
                ))
                .await;
                Outcome::Retrieved(message)
            }
            Err(e) => {
                self.fail(Operation::Retrieve, e, started).await;
                Outcome::Failed
            }
        }
    }

    async fn submit(&self, draft: &str) -> Result<TxHash> {
        // Validate before touching the wallet
        validate_message(draft)?;

        let signer = self.bridge.acquire().await?;
        let client = ContractClient::new(self.connector.connect(signer)?);
        client.submit(draft).await
    }

    async fn retrieve(&self) -> Result<String> {
        let signer = self.bridge.acquire().await?;
        let client = ContractClient::new(self.connector.connect(signer)?);
        client.retrieve().await
    }

    async fn fail(&self, operation: Operation, cause: crate::Error, started: Instant) {
        let message = cause.user_message(operation);
        warn!(operation = operation.name(), error = %cause, "Operation failed");

        self.state.write().await.failed(operation, message);
        self.notifier.notify(Notification::error(message));
        self.record(ActivityEntry::failed(operation, &cause, elapsed_ms(started)))
            .await;
    }

    async fn record(&self, entry: ActivityEntry) {
        if let Some(log) = &self.activity_log {
            log.record(entry).await;
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

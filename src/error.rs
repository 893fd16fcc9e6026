//! Error types for the message board

use thiserror::Error;

/// Shown when the draft is empty at submission time.
pub const EMPTY_MESSAGE: &str = "Message field must not be empty!";
/// Shown for any failure while sending or confirming `setMessage`.
pub const SET_MESSAGE_FAILED: &str = "Could not set initial message";
/// Shown for any failure while calling `getMessage`.
pub const GET_MESSAGE_FAILED: &str = "Could not get message";
/// Shown when no wallet capability was injected.
pub const WALLET_NOT_FOUND: &str = "No wallet found. Please install a wallet to continue.";

#[derive(Error, Debug)]
pub enum Error {
    #[error("No wallet provider available")]
    WalletNotFound,

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Contract read failed: {0}")]
    Read(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The text the form displays for this error.
    ///
    /// Causes are collapsed: wallet failures during an operation surface as
    /// that operation's generic message, only validation and a missing
    /// wallet get their own text.
    pub fn user_message(&self, operation: Operation) -> &'static str {
        match self {
            Error::Validation(_) => EMPTY_MESSAGE,
            Error::WalletNotFound => WALLET_NOT_FOUND,
            _ => match operation {
                Operation::Submit => SET_MESSAGE_FAILED,
                Operation::Retrieve => GET_MESSAGE_FAILED,
            },
        }
    }
}

/// The two user-initiated operations of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Submit,
    Retrieve,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Submit => "submit",
            Operation::Retrieve => "retrieve",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn causes_collapse_to_generic_text() {
        let err = Error::Transaction("nonce too low".to_string());
        assert_eq!(err.user_message(Operation::Submit), SET_MESSAGE_FAILED);

        let err = Error::Wallet("user rejected the request".to_string());
        assert_eq!(err.user_message(Operation::Submit), SET_MESSAGE_FAILED);
        assert_eq!(err.user_message(Operation::Retrieve), GET_MESSAGE_FAILED);
    }

    #[test]
    fn validation_and_missing_wallet_keep_their_text() {
        let err = Error::Validation("empty".to_string());
        assert_eq!(err.user_message(Operation::Submit), EMPTY_MESSAGE);
        assert_eq!(
            Error::WalletNotFound.user_message(Operation::Retrieve),
            WALLET_NOT_FOUND
        );
    }
}

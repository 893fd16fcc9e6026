//! Message Board
//!
//! A small front end for a smart contract that stores one text message:
//! - Acquire a signer from an injected wallet
//! - Send `setMessage` and wait for the transaction to confirm
//! - Read the stored value back with `getMessage`
//!
//! # Error Model
//!
//! - Empty messages are rejected before the wallet is touched
//! - Any other failure is shown as one generic message per operation
//! - The underlying cause goes to tracing and the activity log

pub mod activity_log;
pub mod app;
pub mod config;
pub mod contract;
pub mod wallet;

mod error;

// Re-export commonly used types
pub use app::{FormState, FormView, MessageApp, Outcome};
pub use config::{Config, Network, RpcConfig};
pub use error::{
    Error, Operation, Result, EMPTY_MESSAGE, GET_MESSAGE_FAILED, SET_MESSAGE_FAILED,
    WALLET_NOT_FOUND,
};

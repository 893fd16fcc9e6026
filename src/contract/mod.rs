//! Contract client for the on-chain message store
//!
//! `binding` declares the ABI, `client` exposes the two remote operations
//! behind traits so the form can run against a mock in tests.

mod binding;
mod client;

pub use binding::MessageStorage;
pub use client::{
    validate_message, ContractClient, ContractConnector, MessageContract, OnchainMessageContract,
    RpcConnector,
};

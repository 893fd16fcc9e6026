//! Wallet capability and the bridge that acquires signers from it
//!
//! The wallet is injected into the bridge rather than read from ambient
//! state, so tests can swap in a mock provider.

mod provider;
mod signer;

pub use provider::{AccountSigner, WalletBridge, WalletProvider};
pub use signer::LocalWallet;

//! # Chain Library
//!
//! EVM integration for the mint terminal: a JSON-RPC transport, the injected-wallet
//! capability trait, receipt waiting, and typed bindings for the allowlist and
//! collection contracts.
//!
//! ```text
//! ┌──────────────────────────┐     ┌──────────────────────────────┐
//! │ contracts::{Whitelist,   │     │ provider::WalletProvider     │
//! │   Collection} (sol!)     │────▶│  eth_call / eth_sendTx / ... │
//! └──────────────────────────┘     └──────────────┬───────────────┘
//!                                                 │ rpc::JsonRpcClient
//!                                                 ▼
//!                                       wallet bridge (HTTP)
//! ```

pub mod contracts;
pub mod error;
pub mod provider;
pub mod rpc;
pub mod types;

// Re-export commonly used types from root for convenience
pub use contracts::{CollectionContract, WhitelistContract};
pub use error::{ChainError, Result};
pub use provider::{call_contract, send_contract_call, wait_for_receipt, HttpWalletProvider, WalletProvider};
pub use types::{CallRequest, TransactionReceipt, TransactionRequest};

//! # Services Module
//!
//! Wallet and contract integrations for the mint terminal.
//!
//! ```text
//! services/
//! ├── session.rs    - SessionManager: one wallet connection per run,
//! │                   network check, provider/signer accessors
//! └── contracts.rs  - ContractService: allowlist and collection calls,
//!                     write intents resolved to TxOutcome
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      App                             │
//! │   ┌───────────────────┐      ┌──────────────────┐    │
//! │   │  ContractService  │─────▶│  SessionManager  │    │
//! │   │  (contracts.rs)   │      │  (session.rs)    │    │
//! │   └─────────┬─────────┘      └────────┬─────────┘    │
//! └─────────────┼─────────────────────────┼──────────────┘
//!               │ lib_chain bindings      │ eth_requestAccounts / eth_chainId
//!               ▼                         ▼
//!          ┌───────────────────────────────────┐
//!          │  WalletProvider (JSON-RPC bridge) │
//!          └───────────────────────────────────┘
//! ```

pub mod contracts;
pub mod session;

#[cfg(test)]
pub(crate) mod mock_wallet;

pub use contracts::{ContractService, PhaseObservation, TxOutcome, WriteIntent};
pub use session::{Accessor, Provider, SessionManager, Signer, WalletSession};

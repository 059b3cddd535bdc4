//! Typed bindings for the two deployed contracts.
//!
//! Each binding pairs a `sol!` interface with the contract address and exposes one async
//! method per call the terminal makes. Reads go through [`call_contract`](crate::call_contract);
//! writes return the transaction hash and leave receipt waiting to the caller.

pub mod collection;
pub mod whitelist;

pub use collection::{CollectionContract, INeighbors};
pub use whitelist::{IWhitelist, WhitelistContract};

//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use crate::app::state::Role;
use crate::services::{PhaseObservation, TxOutcome, WalletSession, WriteIntent};
use alloy_primitives::{Address, U256};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Wallet connected on the expected network
    Connected(WalletSession),
    /// Connect attempt failed; carries the user-facing alert text
    ConnectFailed(String),
    /// Owner lookup completed for `account`
    RoleResolved { account: Address, role: Role },
    /// Phase poller or a one-shot phase check produced a reading
    PhaseObserved(PhaseObservation),
    /// Collection counters read
    MintCountersRefreshed { minted: U256, max_supply: U256 },
    /// Allowlist counters and the membership of `account` read
    AllowlistRefreshed {
        account: Address,
        count: U256,
        capacity: u8,
        joined: bool,
    },
    /// A write intent reached a terminal outcome
    WriteResolved { intent: WriteIntent, outcome: TxOutcome },
    /// A background read failed
    ReadFailed(String),
}

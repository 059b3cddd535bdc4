//! # Application State
//!
//! Everything the page renders from. Mutated only by the event handler and the
//! click handlers; async tasks report back through [`AppEvent`](crate::app::AppEvent).

use crate::app::view::{self, AllowlistFlags, CallToAction, MintFlags};
use crate::services::{PhaseObservation, TxOutcome, WriteIntent};
use alloy_primitives::{Address, U256};
use std::fmt;

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Allowlist,
    Mint,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Allowlist, Page::Mint]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Allowlist => "Allowlist",
            Page::Mint => "Mint",
        }
    }
}

/// Sale phase of the collection. Ordered so that later phases compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SalePhase {
    NotStarted,
    Presale,
    Ended,
}

impl SalePhase {
    pub fn from_observation(obs: PhaseObservation) -> Self {
        match (obs.started, obs.ended) {
            (false, _) => SalePhase::NotStarted,
            (true, false) => SalePhase::Presale,
            (true, true) => SalePhase::Ended,
        }
    }

    /// Apply an observation. Never moves backwards: a stale or lagging read cannot
    /// undo a phase already seen.
    pub fn advance(self, obs: PhaseObservation) -> Self {
        self.max(Self::from_observation(obs))
    }
}

/// Relationship of the connected account to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// No wallet connected yet
    Guest,
    Holder,
    Owner,
}

impl Role {
    pub fn derive(account: Address, owner: Address) -> Self {
        if account == owner {
            Role::Owner
        } else {
            Role::Holder
        }
    }
}

/// Count read from chain. Only ever grows: an older read arriving late is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MintCounter(U256);

impl MintCounter {
    pub fn value(&self) -> U256 {
        self.0
    }

    pub fn observe(&mut self, value: U256) {
        if value > self.0 {
            self.0 = value;
        }
    }
}

impl fmt::Display for MintCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowlistStatus {
    /// Set after a confirmed join or a positive membership read
    pub joined: bool,
    pub count: MintCounter,
    pub capacity: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Message waiting to be shown as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub page: Page,
    /// A connect request is in flight
    pub connecting: bool,
    pub connected: bool,
    pub account: Option<Address>,
    /// A write intent is in flight
    pub loading: bool,
    pub role: Role,
    pub phase: SalePhase,
    pub minted: MintCounter,
    pub max_supply: Option<U256>,
    pub allowlist: AllowlistStatus,
    pub last_outcome: Option<(WriteIntent, TxOutcome)>,
    /// Pending notifications to display
    pub pending_notifications: Vec<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Allowlist,
            connecting: false,
            connected: false,
            account: None,
            loading: false,
            role: Role::Guest,
            phase: SalePhase::NotStarted,
            minted: MintCounter::default(),
            max_supply: None,
            allowlist: AllowlistStatus::default(),
            last_outcome: None,
            pending_notifications: Vec::new(),
        }
    }
}

impl AppState {
    pub fn mint_flags(&self) -> MintFlags {
        MintFlags {
            connected: self.connected,
            loading: self.loading,
            is_owner: self.role == Role::Owner,
            phase: self.phase,
        }
    }

    pub fn allowlist_flags(&self) -> AllowlistFlags {
        AllowlistFlags {
            connected: self.connected,
            loading: self.loading,
            joined: self.allowlist.joined,
        }
    }

    /// The single control the current page should show.
    pub fn call_to_action(&self) -> CallToAction {
        match self.page {
            Page::Allowlist => view::reduce_allowlist(self.allowlist_flags()),
            Page::Mint => view::reduce_mint(self.mint_flags()),
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notice::new(level, message));
    }
}

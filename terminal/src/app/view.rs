//! # View State Reducers
//!
//! Pure functions from a handful of flags to the one control a page shows.
//! Precedence is first match wins.
//!
//! Mint page: not connected > loading > owner before presale > presale not started >
//! presale active > presale ended.
//!
//! Allowlist page: not connected > already joined > loading > join.

use crate::app::state::SalePhase;
use crate::services::WriteIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    ConnectPrompt,
    Loading,
    OwnerStartControl,
    NotStartedNotice,
    PresaleMintControl,
    PublicMintControl,
    JoinAllowlistControl,
    AlreadyJoinedNotice,
}

impl CallToAction {
    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::ConnectPrompt => "Connect your wallet",
            CallToAction::Loading => "Loading...",
            CallToAction::OwnerStartControl => "Start Presale!",
            CallToAction::NotStartedNotice => "Presale hasn't started yet!",
            CallToAction::PresaleMintControl => "Presale Mint",
            CallToAction::PublicMintControl => "Public Mint",
            CallToAction::JoinAllowlistControl => "Join the Whitelist",
            CallToAction::AlreadyJoinedNotice => "Thanks for joining the Whitelist!",
        }
    }

    /// The write a click on this control submits. `None` for the connect prompt and
    /// for notices.
    pub fn intent(&self) -> Option<WriteIntent> {
        match self {
            CallToAction::OwnerStartControl => Some(WriteIntent::StartPresale),
            CallToAction::PresaleMintControl => Some(WriteIntent::PresaleMint),
            CallToAction::PublicMintControl => Some(WriteIntent::PublicMint),
            CallToAction::JoinAllowlistControl => Some(WriteIntent::JoinAllowlist),
            _ => None,
        }
    }

    /// Whether this renders as a clickable control rather than a notice.
    pub fn is_actionable(&self) -> bool {
        !matches!(
            self,
            CallToAction::Loading | CallToAction::NotStartedNotice | CallToAction::AlreadyJoinedNotice
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintFlags {
    pub connected: bool,
    pub loading: bool,
    pub is_owner: bool,
    pub phase: SalePhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowlistFlags {
    pub connected: bool,
    pub loading: bool,
    pub joined: bool,
}

pub fn reduce_mint(flags: MintFlags) -> CallToAction {
    if !flags.connected {
        return CallToAction::ConnectPrompt;
    }
    if flags.loading {
        return CallToAction::Loading;
    }
    match flags.phase {
        SalePhase::NotStarted if flags.is_owner => CallToAction::OwnerStartControl,
        SalePhase::NotStarted => CallToAction::NotStartedNotice,
        SalePhase::Presale => CallToAction::PresaleMintControl,
        SalePhase::Ended => CallToAction::PublicMintControl,
    }
}

pub fn reduce_allowlist(flags: AllowlistFlags) -> CallToAction {
    if !flags.connected {
        CallToAction::ConnectPrompt
    } else if flags.joined {
        CallToAction::AlreadyJoinedNotice
    } else if flags.loading {
        CallToAction::Loading
    } else {
        CallToAction::JoinAllowlistControl
    }
}

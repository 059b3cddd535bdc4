//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! Follow-up reads triggered by an event (role, counters, allowlist, phase) are spawned
//! after the state lock is released.

use crate::app::state::{NoticeLevel, Role};
use crate::app::{tasks, App, AppEvent};
use crate::core::service::PhaseSource;
use crate::services::{PhaseObservation, TxOutcome, WalletSession, WriteIntent};
use alloy_primitives::{Address, U256};
use std::sync::Arc;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event and never holds it across a spawn.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(?event, "Handling event");

        match event {
            AppEvent::Connected(session) => self.handle_connected(session),
            AppEvent::ConnectFailed(message) => self.handle_connect_failed(message),
            AppEvent::RoleResolved { account, role } => self.handle_role_resolved(account, role),
            AppEvent::PhaseObserved(observation) => self.handle_phase_observed(observation),
            AppEvent::MintCountersRefreshed { minted, max_supply } => {
                self.handle_mint_counters(minted, max_supply)
            }
            AppEvent::AllowlistRefreshed {
                account,
                count,
                capacity,
                joined,
            } => self.handle_allowlist_refreshed(account, count, capacity, joined),
            AppEvent::WriteResolved { intent, outcome } => self.handle_write_resolved(intent, outcome),
            AppEvent::ReadFailed(message) => {
                self.state.write().notify(NoticeLevel::Warning, message);
            }
        }
    }
}

impl App {
    fn handle_connected(&mut self, session: WalletSession) {
        {
            let mut state = self.state.write();
            state.connecting = false;
            state.connected = true;
            if state.account != Some(session.account) {
                // New account: anything derived from the previous one is void
                state.account = Some(session.account);
                state.role = Role::Holder;
                state.allowlist.joined = false;
            }
        }

        let source: Arc<dyn PhaseSource> = self.service.clone();
        if self.poller.start(source, self.event_tx.clone()) {
            tracing::info!("Phase poller started on first connection");
        }

        tokio::spawn(tasks::chain::resolve_role(
            self.service.clone(),
            self.event_tx.clone(),
            session.account,
        ));
        self.spawn_mint_refresh();
        self.spawn_allowlist_refresh(session);
    }

    fn handle_connect_failed(&mut self, message: String) {
        let session_live = self.service.session().is_connected();
        let mut state = self.state.write();
        state.connecting = false;
        if !session_live {
            // A failed reconnect has already dropped the previous session
            state.connected = false;
            state.account = None;
            state.role = Role::Guest;
            state.allowlist.joined = false;
        }
        state.notify(NoticeLevel::Error, message);
    }

    fn handle_role_resolved(&mut self, account: Address, role: Role) {
        let mut state = self.state.write();
        if state.account == Some(account) {
            state.role = role;
        } else {
            tracing::debug!(%account, "Dropping role for a previous account");
        }
    }

    fn handle_phase_observed(&mut self, observation: PhaseObservation) {
        let mut state = self.state.write();
        let next = state.phase.advance(observation);
        if next != state.phase {
            tracing::info!(from = ?state.phase, to = ?next, "Sale phase advanced");
            state.phase = next;
        }
    }

    fn handle_mint_counters(&mut self, minted: U256, max_supply: U256) {
        let mut state = self.state.write();
        state.minted.observe(minted);
        state.max_supply = Some(max_supply);
    }

    fn handle_allowlist_refreshed(&mut self, account: Address, count: U256, capacity: u8, joined: bool) {
        let mut state = self.state.write();
        state.allowlist.count.observe(count);
        state.allowlist.capacity = Some(capacity);
        // Membership belongs to one account; a lagging read must not undo a confirmed join
        if state.account == Some(account) {
            state.allowlist.joined |= joined;
        }
    }

    fn handle_write_resolved(&mut self, intent: WriteIntent, outcome: TxOutcome) {
        let session = {
            let mut state = self.state.write();
            state.loading = false;
            state.last_outcome = Some((intent, outcome.clone()));

            match &outcome {
                TxOutcome::Confirmed(_) => {
                    if intent == WriteIntent::JoinAllowlist {
                        state.allowlist.joined = true;
                    }
                    state.notify(NoticeLevel::Success, success_message(intent));
                }
                TxOutcome::Cancelled => {
                    state.notify(NoticeLevel::Info, "Transaction cancelled");
                }
                TxOutcome::Failed(reason) => {
                    state.notify(NoticeLevel::Error, format!("Transaction failed: {reason}"));
                }
            }
            self.service.session().current()
        };

        if !outcome.is_confirmed() {
            return;
        }

        match intent {
            WriteIntent::JoinAllowlist => {
                if let Some(session) = session {
                    self.spawn_allowlist_refresh(session);
                }
            }
            WriteIntent::StartPresale => {
                tokio::spawn(tasks::chain::check_phase(self.service.clone(), self.event_tx.clone()));
            }
            WriteIntent::PresaleMint | WriteIntent::PublicMint => self.spawn_mint_refresh(),
        }
    }

    fn spawn_mint_refresh(&self) {
        tokio::spawn(tasks::chain::refresh_mint_counters(
            self.service.clone(),
            self.event_tx.clone(),
        ));
    }

    fn spawn_allowlist_refresh(&self, session: WalletSession) {
        tokio::spawn(tasks::chain::refresh_allowlist(
            self.service.clone(),
            self.event_tx.clone(),
            session.account,
        ));
    }
}

fn success_message(intent: WriteIntent) -> &'static str {
    match intent {
        WriteIntent::JoinAllowlist => "You joined the Whitelist!",
        WriteIntent::StartPresale => "Presale started!",
        WriteIntent::PresaleMint | WriteIntent::PublicMint => "You successfully minted a NFT Neighbor!",
    }
}

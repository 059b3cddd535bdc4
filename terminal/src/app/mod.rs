//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async chain tasks,
//! and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*_click() - user action handlers           │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  - tasks::chain  - connect, reads, write intents            │
//! │  - tasks::phase  - phase poller (the only autonomous task)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write intents
//!
//! A click on a write control goes through [`App::handle_write_click`], which refuses
//! while another write is in flight. The spawned task always ends in
//! [`AppEvent::WriteResolved`]; only a confirmed outcome changes local flags and
//! triggers the dependent reads (allowlist after a join, counters after a mint,
//! phase after the owner starts the presale).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use terminal::app::App;
//! use lib_core::ChainConfig;
//!
//! # fn run(config: ChainConfig) -> terminal::Result<()> {
//! let mut app = App::new(&config)?;
//!
//! // In the egui update loop:
//! app.on_tick();
//! let cta = app.state.read().call_to_action();
//! # Ok(())
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;
mod view;

pub use events::AppEvent;
pub use state::*;
pub use tasks::{PhasePoller, PollerState};
pub use view::{reduce_allowlist, reduce_mint, AllowlistFlags, CallToAction, MintFlags};

use crate::core::Result;
use crate::services::{ContractService, SessionManager, WriteIntent};
use async_channel::{unbounded, Receiver, Sender};
use lib_chain::{HttpWalletProvider, WalletProvider};
use lib_core::ChainConfig;
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator.
///
/// Owns the wallet session (through the [`ContractService`]) and the phase poller.
/// Dropping the app aborts the poller.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks briefly: the render pass and the event handler share it.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    service: Arc<ContractService>,

    poller: PhasePoller,
}

impl App {
    /// Create the app against the JSON-RPC wallet endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client for the wallet endpoint cannot be built.
    pub fn new(config: &ChainConfig) -> Result<Self> {
        let wallet = HttpWalletProvider::new(config.wallet_rpc_url.clone())?;
        Ok(Self::with_wallet(Arc::new(wallet), config))
    }

    /// Create the app with an injected wallet provider.
    pub fn with_wallet(wallet: Arc<dyn WalletProvider>, config: &ChainConfig) -> Self {
        let session = Arc::new(SessionManager::new(wallet, config.chain_id, config.chain_name.clone()));
        let service = Arc::new(ContractService::new(session, config));
        let (event_tx, event_rx) = unbounded();

        tracing::info!(
            chain_id = config.chain_id,
            whitelist = %config.whitelist_contract,
            collection = %config.collection_contract,
            "App state initialized"
        );

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            service,
            poller: PhasePoller::new(config.phase_poll_interval),
        }
    }

    /// Called every frame: drains the event channel without blocking.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed events");
        }
    }

    /// Handle one async event result.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    pub fn poller_state(&self) -> PollerState {
        self.poller.state()
    }

    /// Take the notifications queued since the last call.
    pub fn take_notifications(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle connect button click. Returns `false` if a connect is already running.
    pub fn handle_connect_click(&self) -> bool {
        handlers::session::handle_connect_click(self.state.clone(), self.event_tx.clone(), self.service.clone(), false)
    }

    /// Drop the live session and connect again.
    pub fn handle_reconnect_click(&self) -> bool {
        handlers::session::handle_connect_click(self.state.clone(), self.event_tx.clone(), self.service.clone(), true)
    }

    /// Handle a write control click. Returns `false` if the click was ignored.
    pub fn handle_write_click(&self, intent: WriteIntent) -> bool {
        handlers::sale::handle_write_click(self.state.clone(), self.event_tx.clone(), self.service.clone(), intent)
    }

    pub fn handle_page_change(&self, page: Page) {
        handlers::navigation::handle_page_change(self.state.clone(), page);
    }

    pub fn next_page(&self) {
        handlers::navigation::next_page(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::contracts::tests::test_config;
    use crate::services::mock_wallet::{MockWallet, ACCOUNT};
    use crate::services::{TxOutcome, WalletSession};
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::{SolCall, SolValue};
    use lib_chain::contracts::{INeighbors, IWhitelist};
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    /// Wallet on the expected network with every read answered.
    fn scripted_wallet(owner: Address) -> Arc<MockWallet> {
        let wallet = Arc::new(MockWallet::new(4));
        wallet.respond(INeighbors::ownerCall::SELECTOR, owner.abi_encode());
        wallet.respond(INeighbors::presaleStartedCall::SELECTOR, true.abi_encode());
        wallet.respond(INeighbors::presaleEndedCall::SELECTOR, U256::MAX.abi_encode());
        wallet.respond(INeighbors::tokenIdsCall::SELECTOR, U256::from(3).abi_encode());
        wallet.respond(INeighbors::maxTokenIdsCall::SELECTOR, U256::from(20).abi_encode());
        wallet.respond(IWhitelist::numAddressesWhitelistedCall::SELECTOR, U256::from(2).abi_encode());
        wallet.respond(IWhitelist::maxWhitelistedAddressesCall::SELECTOR, U256::from(10).abi_encode());
        wallet.respond(IWhitelist::whitelistedAddressesCall::SELECTOR, false.abi_encode());
        wallet
    }

    /// Feed events into the app until `done` holds.
    async fn pump_until(app: &mut App, done: impl Fn(&AppState) -> bool) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while !done(&*app.state.read()) {
                let event = app.event_rx.recv().await.unwrap();
                app.handle_event(event);
            }
        })
        .await
        .expect("state never reached the expected condition");
    }

    /// Connected app with counters, allowlist and phase already read.
    async fn connected_app(wallet: &Arc<MockWallet>) -> App {
        let mut app = App::with_wallet(wallet.clone(), &test_config());
        assert!(app.handle_connect_click());
        pump_until(&mut app, |s| {
            s.connected
                && s.max_supply.is_some()
                && s.allowlist.capacity.is_some()
                && s.phase == SalePhase::Presale
                && s.role != Role::Guest
        })
        .await;
        app
    }

    #[tokio::test]
    async fn test_connect_on_wrong_network_alerts_and_stays_disconnected() {
        let wallet = Arc::new(MockWallet::new(1));
        let mut app = App::with_wallet(wallet, &test_config());

        assert!(app.handle_connect_click());
        pump_until(&mut app, |s| !s.connecting).await;

        let state = app.state.read().clone();
        assert!(!state.connected);
        assert_eq!(state.call_to_action(), CallToAction::ConnectPrompt);
        assert_eq!(app.poller_state(), PollerState::Unstarted);

        let notices = app.take_notifications();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Change the network to Rinkeby");
    }

    #[tokio::test]
    async fn test_connect_reads_counters_and_starts_poller() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let app = connected_app(&wallet).await;

        let state = app.state.read().clone();
        assert_eq!(state.account, Some(ACCOUNT));
        assert_eq!(state.role, Role::Holder);
        assert_eq!(state.minted.value(), U256::from(3));
        assert_eq!(state.max_supply, Some(U256::from(20)));
        assert_eq!(state.allowlist.count.value(), U256::from(2));
        assert_eq!(state.allowlist.capacity, Some(10));
        assert_eq!(app.poller_state(), PollerState::Polling);
    }

    #[tokio::test]
    async fn test_owner_sees_start_control_before_presale() {
        let wallet = scripted_wallet(ACCOUNT);
        wallet.respond(INeighbors::presaleStartedCall::SELECTOR, false.abi_encode());

        let mut app = App::with_wallet(wallet.clone(), &test_config());
        app.handle_page_change(Page::Mint);
        app.handle_connect_click();
        pump_until(&mut app, |s| s.role == Role::Owner).await;

        assert_eq!(app.state.read().call_to_action(), CallToAction::OwnerStartControl);
    }

    #[tokio::test]
    async fn test_write_refused_before_connect() {
        let wallet = scripted_wallet(ACCOUNT);
        let app = App::with_wallet(wallet.clone(), &test_config());

        assert!(!app.handle_write_click(WriteIntent::JoinAllowlist));
        assert!(!app.state.read().loading);
        assert_eq!(wallet.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_mint_restores_loading_and_counters() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let mut app = connected_app(&wallet).await;
        app.handle_page_change(Page::Mint);
        app.take_notifications();

        wallet.reject_sends.store(true, Ordering::SeqCst);
        let minted_before = app.state.read().minted;

        assert!(app.handle_write_click(WriteIntent::PresaleMint));
        assert_eq!(app.state.read().call_to_action(), CallToAction::Loading);
        // No second write while the first is in flight
        assert!(!app.handle_write_click(WriteIntent::PresaleMint));

        pump_until(&mut app, |s| !s.loading).await;

        let state = app.state.read().clone();
        assert_eq!(state.minted, minted_before);
        assert_eq!(state.last_outcome, Some((WriteIntent::PresaleMint, TxOutcome::Cancelled)));
        assert_eq!(state.call_to_action(), CallToAction::PresaleMintControl);
        assert_eq!(wallet.sent_count(), 0);
        assert!(app
            .take_notifications()
            .iter()
            .any(|n| n.level == NoticeLevel::Info));
    }

    #[tokio::test]
    async fn test_confirmed_join_marks_joined() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let mut app = connected_app(&wallet).await;
        assert_eq!(app.state.read().call_to_action(), CallToAction::JoinAllowlistControl);

        wallet.respond(IWhitelist::numAddressesWhitelistedCall::SELECTOR, U256::from(3).abi_encode());
        assert!(app.handle_write_click(WriteIntent::JoinAllowlist));
        pump_until(&mut app, |s| !s.loading).await;

        assert!(app.state.read().allowlist.joined);
        assert_eq!(app.state.read().call_to_action(), CallToAction::AlreadyJoinedNotice);
        assert_eq!(wallet.sent_count(), 1);

        // Dependent read refreshes the count; the stale membership read keeps joined
        pump_until(&mut app, |s| s.allowlist.count.value() == U256::from(3)).await;
        assert!(app.state.read().allowlist.joined);
    }

    #[tokio::test]
    async fn test_confirmed_mint_refreshes_counter() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let mut app = connected_app(&wallet).await;

        wallet.respond(INeighbors::tokenIdsCall::SELECTOR, U256::from(4).abi_encode());
        assert!(app.handle_write_click(WriteIntent::PublicMint));
        pump_until(&mut app, |s| s.minted.value() == U256::from(4)).await;

        let sent = wallet.sent.lock();
        assert_eq!(sent[0].value, Some(test_config().mint_price_wei));
        assert_eq!(&sent[0].data[..], &INeighbors::mintCall {}.abi_encode()[..]);
    }

    #[tokio::test]
    async fn test_reverted_write_reports_failure() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let mut app = connected_app(&wallet).await;
        app.take_notifications();

        wallet.revert_receipts.store(true, Ordering::SeqCst);
        assert!(app.handle_write_click(WriteIntent::JoinAllowlist));
        pump_until(&mut app, |s| !s.loading).await;

        assert!(!app.state.read().allowlist.joined);
        assert!(matches!(
            app.state.read().last_outcome,
            Some((WriteIntent::JoinAllowlist, TxOutcome::Failed(_)))
        ));
        assert!(app
            .take_notifications()
            .iter()
            .any(|n| n.level == NoticeLevel::Error));
    }

    #[tokio::test]
    async fn test_failed_reconnect_reverts_to_connect_prompt() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let mut app = connected_app(&wallet).await;
        app.take_notifications();

        wallet.chain_id.store(1, Ordering::SeqCst);
        assert!(app.handle_reconnect_click());
        pump_until(&mut app, |s| !s.connecting).await;

        let state = app.state.read().clone();
        assert!(!state.connected);
        assert_eq!(state.account, None);
        assert_eq!(state.role, Role::Guest);
        assert_eq!(state.call_to_action(), CallToAction::ConnectPrompt);
        assert!(app
            .take_notifications()
            .iter()
            .any(|n| n.message == "Change the network to Rinkeby"));

        // Back on the right network the prompt connects again
        wallet.chain_id.store(4, Ordering::SeqCst);
        assert!(app.handle_connect_click());
        pump_until(&mut app, |s| s.connected).await;
        assert_eq!(app.state.read().account, Some(ACCOUNT));
    }

    #[tokio::test]
    async fn test_reconnect_same_account_keeps_joined() {
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        wallet.respond(IWhitelist::whitelistedAddressesCall::SELECTOR, true.abi_encode());
        let mut app = connected_app(&wallet).await;
        pump_until(&mut app, |s| s.allowlist.joined).await;

        assert!(app.handle_reconnect_click());
        pump_until(&mut app, |s| !s.connecting).await;

        let state = app.state.read().clone();
        assert!(state.connected);
        assert!(state.allowlist.joined);
        assert_eq!(wallet.account_requests.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reads_for_previous_account_are_dropped() {
        let first = ACCOUNT;
        let second = Address::repeat_byte(0xbb);
        let wallet = scripted_wallet(Address::repeat_byte(0x99));
        let mut app = App::with_wallet(wallet, &test_config());

        app.handle_event(AppEvent::Connected(WalletSession { account: first, chain_id: 4 }));
        app.handle_event(AppEvent::Connected(WalletSession { account: second, chain_id: 4 }));

        // Reads started for the first account land late
        app.handle_event(AppEvent::AllowlistRefreshed {
            account: first,
            count: U256::from(5),
            capacity: 10,
            joined: true,
        });
        app.handle_event(AppEvent::RoleResolved { account: first, role: Role::Owner });

        let state = app.state.read().clone();
        assert_eq!(state.account, Some(second));
        assert!(!state.allowlist.joined);
        assert_eq!(state.role, Role::Holder);
        // Counters are not per account
        assert_eq!(state.allowlist.count.value(), U256::from(5));

        app.handle_event(AppEvent::RoleResolved { account: second, role: Role::Owner });
        assert_eq!(app.state.read().role, Role::Owner);
    }

    #[tokio::test]
    async fn test_confirmed_start_presale_shows_presale_mint() {
        let wallet = scripted_wallet(ACCOUNT);
        wallet.respond(INeighbors::presaleStartedCall::SELECTOR, false.abi_encode());

        let mut app = App::with_wallet(wallet.clone(), &test_config());
        app.handle_page_change(Page::Mint);
        assert!(app.handle_connect_click());
        pump_until(&mut app, |s| s.role == Role::Owner).await;
        assert_eq!(app.state.read().call_to_action(), CallToAction::OwnerStartControl);

        wallet.respond(INeighbors::presaleStartedCall::SELECTOR, true.abi_encode());
        assert!(app.handle_write_click(WriteIntent::StartPresale));
        // The poller's next tick is seconds away; only the follow-up check can get here
        pump_until(&mut app, |s| s.phase == SalePhase::Presale).await;

        let state = app.state.read().clone();
        assert!(matches!(
            state.last_outcome,
            Some((WriteIntent::StartPresale, TxOutcome::Confirmed(_)))
        ));
        assert_eq!(state.call_to_action(), CallToAction::PresaleMintControl);
        assert_eq!(wallet.sent_count(), 1);
    }
}

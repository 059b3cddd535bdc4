//! # Session Handlers
//!
//! Handlers for the connect button.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::ContractService;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle connect button click
///
/// Internal handler function - use [`crate::app::App::handle_connect_click`] instead.
/// With `fresh` the live session is dropped and re-established.
pub(crate) fn handle_connect_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<ContractService>,
    fresh: bool,
) -> bool {
    {
        let mut state = state.write();
        if state.connecting {
            tracing::debug!("Connect already in progress");
            return false;
        }
        state.connecting = true;
    } // Lock released before spawning

    tracing::info!(fresh, "Connecting wallet");
    tokio::spawn(tasks::chain::connect(service, event_tx, fresh));
    true
}

//! # Sale Handlers
//!
//! Handlers for the write buttons: join allowlist, start presale, presale and public mint.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::{ContractService, WriteIntent};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle a write button click
///
/// Internal handler function - use [`crate::app::App::handle_write_click`] instead.
///
/// Returns `false` without spawning anything when no wallet is connected or another
/// write is still in flight. Otherwise `loading` is set before the task is spawned
/// and stays set until the matching [`AppEvent::WriteResolved`] is handled.
pub(crate) fn handle_write_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<ContractService>,
    intent: WriteIntent,
) -> bool {
    {
        let mut state = state.write();
        if !state.connected {
            tracing::warn!(%intent, "Write ignored - wallet not connected");
            return false;
        }
        if state.loading {
            tracing::warn!(%intent, "Write ignored - another write is in flight");
            return false;
        }
        state.loading = true;
    }

    tokio::spawn(tasks::chain::submit_write(service, event_tx, intent));
    true
}

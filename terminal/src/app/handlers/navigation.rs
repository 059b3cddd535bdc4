//! # Navigation Handlers
//!
//! Handlers for switching between the allowlist and mint pages.

use crate::app::state::{AppState, Page};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle page change
///
/// Internal handler function - use [`crate::app::App::handle_page_change`] instead.
pub(crate) fn handle_page_change(state: Arc<RwLock<AppState>>, page: Page) {
    let mut state = state.write();
    if state.page != page {
        tracing::debug!(from = state.page.title(), to = page.title(), "Page changed");
        state.page = page;
    }
}

/// Cycle to the next page
///
/// Internal handler function - use [`crate::app::App::next_page`] instead.
pub(crate) fn next_page(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped page navigation - state locked");
            return;
        }
    };

    let pages = Page::all();
    let current = pages.iter().position(|p| *p == state.page).unwrap_or(0);
    state.page = pages[(current + 1) % pages.len()];
}

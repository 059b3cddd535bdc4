//! # Custom UI Widgets
//!
//! - **[`header`]**: title bar with page tabs and wallet status
//! - **[`notifications`]**: toast notifications
//! - **[`call_to_action`]**: the single control a page shows

pub mod call_to_action;
pub mod header;
pub mod notifications;

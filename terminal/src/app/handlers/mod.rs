//! # Event Handlers
//!
//! User action handlers organized by domain.

pub mod navigation;
pub mod sale;
pub mod session;

//! # Screens
//!
//! One module per [`Page`](crate::app::Page). Both render straight from a cloned
//! [`AppState`](crate::app::AppState) snapshot.

pub mod allowlist;
pub mod mint;

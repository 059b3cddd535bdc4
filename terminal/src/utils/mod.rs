//! # Utility Functions
//!
//! - **[`runtime`]**: process-wide Tokio runtime shared by the UI thread
//!
//! Address formatting lives in [`shared::utils`].

pub mod runtime;

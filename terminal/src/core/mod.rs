//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`PhaseSource`)
//!
//! ## Dependency Injection
//!
//! The phase poller only needs something that can report the sale phase, so it
//! takes a trait object rather than the full contract service:
//!
//! ```rust,ignore
//! use terminal::core::PhaseSource;
//!
//! // In production: the contract service
//! let source: Arc<dyn PhaseSource> = contract_service.clone();
//!
//! // In tests: a scripted sequence of observations
//! let source: Arc<dyn PhaseSource> = Arc::new(ScriptedPhases::new(vec![...]));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::PhaseSource;

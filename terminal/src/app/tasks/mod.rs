//! # Async Tasks
//!
//! Background work spawned by handlers: chain reads and writes, and the phase poller.

pub mod chain;
pub mod phase;

pub use phase::{PhasePoller, PollerState};

//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use crate::services::contracts::PhaseObservation;
use async_trait::async_trait;

/// Anything that can report the current sale phase.
///
/// Implemented by [`ContractService`](crate::services::ContractService); the phase poller
/// depends only on this trait.
#[async_trait]
pub trait PhaseSource: Send + Sync {
    /// One phase check: the started flag, then the ended flag only when started.
    async fn observe_phase(&self) -> Result<PhaseObservation>;
}

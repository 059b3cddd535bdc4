//! # Chain Tasks
//!
//! Async work against the wallet and contracts. Every function reports through the
//! event channel instead of returning, so callers just `tokio::spawn` them.

use crate::app::events::AppEvent;
use crate::app::state::Role;
use crate::core::service::PhaseSource;
use crate::services::{ContractService, WriteIntent};
use alloy_primitives::Address;
use async_channel::Sender;
use std::sync::Arc;
use tracing::{debug, error, info, Instrument};

/// Connect (or reconnect) the wallet session.
pub(crate) async fn connect(service: Arc<ContractService>, event_tx: Sender<AppEvent>, fresh: bool) {
    let session = service.session();
    let result = if fresh {
        session.reconnect().await
    } else {
        session.connect().await
    };

    let event = match result {
        Ok(session) => AppEvent::Connected(session),
        Err(e) => {
            error!(error = %e, "Wallet connection failed");
            AppEvent::ConnectFailed(e.to_string())
        }
    };
    let _ = event_tx.send(event).await;
}

/// Compare the collection owner with the connected account.
pub(crate) async fn resolve_role(service: Arc<ContractService>, event_tx: Sender<AppEvent>, account: Address) {
    match service.read_owner().await {
        Ok(owner) => {
            let role = Role::derive(account, owner);
            debug!(?role, owner = %owner, "Role resolved");
            let _ = event_tx.send(AppEvent::RoleResolved { account, role }).await;
        }
        Err(e) => report_read_failure(&event_tx, "owner", e).await,
    }
}

pub(crate) async fn refresh_mint_counters(service: Arc<ContractService>, event_tx: Sender<AppEvent>) {
    let counters = async {
        let minted = service.read_minted_count().await?;
        let max_supply = service.read_max_supply().await?;
        Ok::<_, crate::core::AppError>((minted, max_supply))
    }
    .await;

    match counters {
        Ok((minted, max_supply)) => {
            let _ = event_tx
                .send(AppEvent::MintCountersRefreshed { minted, max_supply })
                .await;
        }
        Err(e) => report_read_failure(&event_tx, "mint counters", e).await,
    }
}

pub(crate) async fn refresh_allowlist(service: Arc<ContractService>, event_tx: Sender<AppEvent>, account: Address) {
    let status = async {
        let count = service.read_allowlist_count().await?;
        let capacity = service.read_allowlist_capacity().await?;
        let joined = service.read_is_allowlisted(account).await?;
        Ok::<_, crate::core::AppError>((count, capacity, joined))
    }
    .await;

    match status {
        Ok((count, capacity, joined)) => {
            let _ = event_tx
                .send(AppEvent::AllowlistRefreshed {
                    account,
                    count,
                    capacity,
                    joined,
                })
                .await;
        }
        Err(e) => report_read_failure(&event_tx, "allowlist", e).await,
    }
}

/// One-shot phase reading, used right after the owner starts the presale.
pub(crate) async fn check_phase(service: Arc<ContractService>, event_tx: Sender<AppEvent>) {
    match service.observe_phase().await {
        Ok(observation) => {
            let _ = event_tx.send(AppEvent::PhaseObserved(observation)).await;
        }
        Err(e) => report_read_failure(&event_tx, "sale phase", e).await,
    }
}

/// Submit one write intent and report its terminal outcome.
pub(crate) async fn submit_write(service: Arc<ContractService>, event_tx: Sender<AppEvent>, intent: WriteIntent) {
    let trace_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("write_intent", %intent, %trace_id);

    async move {
        info!("Submitting write");
        let price = service.mint_price();
        let outcome = match intent {
            WriteIntent::JoinAllowlist => service.submit_join_allowlist().await,
            WriteIntent::StartPresale => service.submit_start_presale().await,
            WriteIntent::PresaleMint => service.submit_presale_mint(price).await,
            WriteIntent::PublicMint => service.submit_public_mint(price).await,
        };
        let _ = event_tx.send(AppEvent::WriteResolved { intent, outcome }).await;
    }
    .instrument(span)
    .await
}

async fn report_read_failure(event_tx: &Sender<AppEvent>, what: &str, e: crate::core::AppError) {
    error!(error = %e, what, "Chain read failed");
    let _ = event_tx
        .send(AppEvent::ReadFailed(format!("Failed to read {what}: {e}")))
        .await;
}

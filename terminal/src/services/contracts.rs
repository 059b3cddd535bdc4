//! # Contract Service
//!
//! Binds the allowlist and collection contracts to the wallet session and turns
//! local intents into contract calls.
//!
//! Reads return `Result`. Writes never return an error: each resolves to exactly one
//! [`TxOutcome`] after the transaction is confirmed, refused by the user, or failed.
//! The caller updates local flags only on [`TxOutcome::Confirmed`].

use crate::core::error::{AppError, Result};
use crate::core::service::PhaseSource;
use crate::services::session::SessionManager;
use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use lib_chain::{wait_for_receipt, CollectionContract, WhitelistContract};
use lib_core::ChainConfig;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// State-changing actions the user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteIntent {
    JoinAllowlist,
    StartPresale,
    PresaleMint,
    PublicMint,
}

impl fmt::Display for WriteIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriteIntent::JoinAllowlist => "join_allowlist",
            WriteIntent::StartPresale => "start_presale",
            WriteIntent::PresaleMint => "presale_mint",
            WriteIntent::PublicMint => "public_mint",
        };
        f.write_str(name)
    }
}

/// How a write intent ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOutcome {
    /// Mined with a successful receipt.
    Confirmed(B256),
    /// The user declined in the wallet.
    Cancelled,
    /// Anything else: wrong network, revert, transport error, receipt timeout.
    Failed(String),
}

impl TxOutcome {
    fn from_error(err: AppError) -> Self {
        if err.is_user_rejection() {
            TxOutcome::Cancelled
        } else {
            TxOutcome::Failed(err.to_string())
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, TxOutcome::Confirmed(_))
    }
}

/// Result of one phase check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseObservation {
    pub started: bool,
    pub ended: bool,
}

/// True when the presale end timestamp `end` (unix seconds) lies before `now`.
pub fn presale_ended_at(end: U256, now: i64) -> bool {
    end < U256::from(now.max(0) as u64)
}

pub struct ContractService {
    session: Arc<SessionManager>,
    whitelist: WhitelistContract,
    collection: CollectionContract,
    mint_price: U256,
    receipt_poll_interval: Duration,
    receipt_timeout: Duration,
}

impl ContractService {
    pub fn new(session: Arc<SessionManager>, config: &ChainConfig) -> Self {
        Self {
            session,
            whitelist: WhitelistContract::new(config.whitelist_contract),
            collection: CollectionContract::new(config.collection_contract),
            mint_price: config.mint_price_wei,
            receipt_poll_interval: config.receipt_poll_interval,
            receipt_timeout: config.receipt_timeout,
        }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Payment attached to presale and public mints.
    pub fn mint_price(&self) -> U256 {
        self.mint_price
    }

    // region: --- Reads

    pub async fn read_presale_started(&self) -> Result<bool> {
        let provider = self.session.provider().await?;
        Ok(self.collection.presale_started(provider.wallet()).await?)
    }

    /// Compares the on-chain end timestamp with the local clock.
    pub async fn read_presale_ended(&self) -> Result<bool> {
        let provider = self.session.provider().await?;
        let end = self.collection.presale_end(provider.wallet()).await?;
        Ok(presale_ended_at(end, chrono::Utc::now().timestamp()))
    }

    pub async fn read_owner(&self) -> Result<Address> {
        let provider = self.session.provider().await?;
        Ok(self.collection.owner(provider.wallet()).await?)
    }

    pub async fn read_minted_count(&self) -> Result<U256> {
        let provider = self.session.provider().await?;
        Ok(self.collection.minted(provider.wallet()).await?)
    }

    pub async fn read_max_supply(&self) -> Result<U256> {
        let provider = self.session.provider().await?;
        Ok(self.collection.max_supply(provider.wallet()).await?)
    }

    pub async fn read_allowlist_count(&self) -> Result<U256> {
        let provider = self.session.provider().await?;
        Ok(self.whitelist.joined_count(provider.wallet()).await?)
    }

    pub async fn read_allowlist_capacity(&self) -> Result<u8> {
        let provider = self.session.provider().await?;
        Ok(self.whitelist.capacity(provider.wallet()).await?)
    }

    pub async fn read_is_allowlisted(&self, account: Address) -> Result<bool> {
        let provider = self.session.provider().await?;
        Ok(self.whitelist.is_allowlisted(provider.wallet(), account).await?)
    }

    // endregion: --- Reads

    // region: --- Writes

    pub async fn submit_join_allowlist(&self) -> TxOutcome {
        let sent = self.send_join().await;
        self.settle(WriteIntent::JoinAllowlist, sent).await
    }

    /// Owner only; the contract reverts for anyone else.
    pub async fn submit_start_presale(&self) -> TxOutcome {
        let sent = self.send_start_presale().await;
        self.settle(WriteIntent::StartPresale, sent).await
    }

    pub async fn submit_presale_mint(&self, value: U256) -> TxOutcome {
        let sent = self.send_presale_mint(value).await;
        self.settle(WriteIntent::PresaleMint, sent).await
    }

    pub async fn submit_public_mint(&self, value: U256) -> TxOutcome {
        let sent = self.send_public_mint(value).await;
        self.settle(WriteIntent::PublicMint, sent).await
    }

    async fn send_join(&self) -> Result<B256> {
        let signer = self.session.signer().await?;
        Ok(self.whitelist.join(signer.wallet(), signer.address()).await?)
    }

    async fn send_start_presale(&self) -> Result<B256> {
        let signer = self.session.signer().await?;
        Ok(self.collection.start_presale(signer.wallet(), signer.address()).await?)
    }

    async fn send_presale_mint(&self, value: U256) -> Result<B256> {
        let signer = self.session.signer().await?;
        Ok(self.collection.presale_mint(signer.wallet(), signer.address(), value).await?)
    }

    async fn send_public_mint(&self, value: U256) -> Result<B256> {
        let signer = self.session.signer().await?;
        Ok(self.collection.public_mint(signer.wallet(), signer.address(), value).await?)
    }

    /// Wait for the receipt of a submitted transaction and classify the result.
    async fn settle(&self, intent: WriteIntent, sent: Result<B256>) -> TxOutcome {
        let outcome = match sent {
            Ok(hash) => {
                info!(%intent, tx = %hash, "Transaction submitted, waiting for confirmation");
                let wallet = self.session.wallet();
                match wait_for_receipt(wallet.as_ref(), hash, self.receipt_poll_interval, self.receipt_timeout).await {
                    Ok(_) => TxOutcome::Confirmed(hash),
                    Err(err) => TxOutcome::from_error(err.into()),
                }
            }
            Err(err) => TxOutcome::from_error(err),
        };

        match &outcome {
            TxOutcome::Confirmed(hash) => info!(%intent, tx = %hash, "Write confirmed"),
            TxOutcome::Cancelled => warn!(%intent, "Write cancelled by user"),
            TxOutcome::Failed(reason) => error!(%intent, reason = %reason, "Write failed"),
        }
        outcome
    }

    // endregion: --- Writes
}

#[async_trait]
impl PhaseSource for ContractService {
    async fn observe_phase(&self) -> Result<PhaseObservation> {
        let started = self.read_presale_started().await?;
        if !started {
            return Ok(PhaseObservation { started, ended: false });
        }
        let ended = self.read_presale_ended().await?;
        Ok(PhaseObservation { started, ended })
    }
}

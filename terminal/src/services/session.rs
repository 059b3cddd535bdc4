//! # Wallet Session
//!
//! Holds the single wallet connection of a run and hands out accessors to it.
//!
//! - [`SessionManager::connect`] asks the wallet for an account and checks its network.
//!   A wrong network is a hard stop: no session is recorded and the caller gets
//!   [`AppError::NetworkMismatch`], whose message is the user alert.
//! - [`SessionManager::accessor`] re-checks the network on every call and returns a
//!   read-only [`Provider`] or a write-capable [`Signer`].
//! - The session is only replaced through [`SessionManager::reconnect`].

use crate::core::error::{AppError, Result};
use alloy_primitives::Address;
use lib_chain::WalletProvider;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// A live wallet connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletSession {
    pub account: Address,
    pub chain_id: u64,
}

/// Read-only view of the wallet.
#[derive(Clone)]
pub struct Provider {
    wallet: Arc<dyn WalletProvider>,
}

impl Provider {
    pub fn wallet(&self) -> &dyn WalletProvider {
        self.wallet.as_ref()
    }
}

/// Write-capable view of the wallet, bound to the connected account.
#[derive(Clone)]
pub struct Signer {
    provider: Provider,
    address: Address,
}

impl Signer {
    pub fn wallet(&self) -> &dyn WalletProvider {
        self.provider.wallet()
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

pub enum Accessor {
    Provider(Provider),
    Signer(Signer),
}

pub struct SessionManager {
    wallet: Arc<dyn WalletProvider>,
    chain_id: u64,
    chain_name: String,
    session: RwLock<Option<WalletSession>>,
}

impl SessionManager {
    pub fn new(wallet: Arc<dyn WalletProvider>, chain_id: u64, chain_name: impl Into<String>) -> Self {
        Self {
            wallet,
            chain_id,
            chain_name: chain_name.into(),
            session: RwLock::new(None),
        }
    }

    pub fn current(&self) -> Option<WalletSession> {
        *self.session.read()
    }

    pub fn is_connected(&self) -> bool {
        self.session.read().is_some()
    }

    /// Raw wallet handle, for receipt polling after a signer submitted a transaction.
    pub fn wallet(&self) -> Arc<dyn WalletProvider> {
        Arc::clone(&self.wallet)
    }

    /// Return the live session, establishing it on first use.
    pub async fn connect(&self) -> Result<WalletSession> {
        if let Some(session) = self.current() {
            return Ok(session);
        }
        self.establish().await
    }

    /// Drop the live session and establish a new one.
    pub async fn reconnect(&self) -> Result<WalletSession> {
        self.session.write().take();
        info!("Wallet session cleared, reconnecting");
        self.establish().await
    }

    /// Read-only accessor, or a signer when `needs_write`.
    pub async fn accessor(&self, needs_write: bool) -> Result<Accessor> {
        let session = self.current().ok_or(AppError::NotConnected)?;
        self.verify_network().await?;

        let provider = Provider {
            wallet: Arc::clone(&self.wallet),
        };
        if needs_write {
            Ok(Accessor::Signer(Signer {
                provider,
                address: session.account,
            }))
        } else {
            Ok(Accessor::Provider(provider))
        }
    }

    pub async fn provider(&self) -> Result<Provider> {
        match self.accessor(false).await? {
            Accessor::Provider(provider) => Ok(provider),
            Accessor::Signer(signer) => Ok(signer.provider),
        }
    }

    pub async fn signer(&self) -> Result<Signer> {
        match self.accessor(true).await? {
            Accessor::Signer(signer) => Ok(signer),
            Accessor::Provider(_) => Err(AppError::NotConnected),
        }
    }

    async fn establish(&self) -> Result<WalletSession> {
        let accounts = self.wallet.request_accounts().await?;
        let account = accounts
            .first()
            .copied()
            .ok_or_else(|| AppError::Wallet("wallet returned no accounts".to_string()))?;

        self.verify_network().await?;

        let session = WalletSession {
            account,
            chain_id: self.chain_id,
        };
        *self.session.write() = Some(session);

        info!(account = %account, chain_id = self.chain_id, "Wallet connected");
        Ok(session)
    }

    async fn verify_network(&self) -> Result<()> {
        let actual = self.wallet.chain_id().await?;
        if actual != self.chain_id {
            warn!(expected = self.chain_id, actual, "Wallet is on the wrong network");
            return Err(AppError::NetworkMismatch {
                expected: self.chain_id,
                actual,
                network: self.chain_name.clone(),
            });
        }
        Ok(())
    }
}

//! # Application Configuration
//!
//! This module manages configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! Two independent configs exist because the two binaries need disjoint settings:
//!
//! - [`ChainConfig`]: wallet endpoint, network, contract addresses and timing for the terminal
//! - [`MetadataConfig`]: bind address, CORS origins and asset location for the metadata server
//!
//! ```rust,no_run
//! use lib_core::config::ChainConfig;
//!
//! let config = ChainConfig::from_env()?;
//! config.validate()?;
//! println!("Minting on {} (chain {})", config.chain_name, config.chain_id);
//! # Ok::<(), lib_core::AppError>(())
//! ```

use crate::error::{AppError, Result};
use alloy_primitives::{address, Address, U256};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Deployed allowlist contract.
pub const DEFAULT_WHITELIST_CONTRACT: Address = address!("23f0be0a6c4116110ca5da97755418e5adbc7eb8");

/// Chain id the contracts are deployed on (Rinkeby).
pub const DEFAULT_CHAIN_ID: u64 = 4;

/// Human-readable name used in the wrong-network alert.
pub const DEFAULT_CHAIN_NAME: &str = "Rinkeby";

/// Local wallet bridge exposing the EIP-1193 request surface over HTTP.
pub const DEFAULT_WALLET_RPC_URL: &str = "http://127.0.0.1:1248";

/// Mint price: 0.01 ether in wei.
pub const DEFAULT_MINT_PRICE_WEI: u64 = 10_000_000_000_000_000;

/// Where token images are hosted; the token id and `.png` are appended.
pub const DEFAULT_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/petertardif/sampleNFT/main/public/nftneighbors/";

pub const DEFAULT_METADATA_BIND_ADDRESS: &str = "127.0.0.1:3001";

/// Terminal configuration: which wallet to talk to, which network is required,
/// which contracts to call and how often to poll.
#[derive(Clone, Debug)]
pub struct ChainConfig {
    /// Wallet bridge endpoint (JSON-RPC over HTTP)
    pub wallet_rpc_url: String,

    /// The only network the terminal accepts
    pub chain_id: u64,

    /// Display name of [`Self::chain_id`]
    pub chain_name: String,

    /// Allowlist contract address
    pub whitelist_contract: Address,

    /// Collection (mint) contract address
    pub collection_contract: Address,

    /// Payment attached to presale and public mints
    pub mint_price_wei: U256,

    /// Delay between sale-phase checks
    ///
    /// Valid range: 1-300 seconds
    pub phase_poll_interval: Duration,

    /// Delay between receipt lookups while waiting for a transaction
    pub receipt_poll_interval: Duration,

    /// Give up waiting for a receipt after this long
    pub receipt_timeout: Duration,
}

impl ChainConfig {
    /// Config with every default filled in except the collection address.
    pub fn new(collection_contract: Address) -> Self {
        Self {
            wallet_rpc_url: DEFAULT_WALLET_RPC_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            chain_name: DEFAULT_CHAIN_NAME.to_string(),
            whitelist_contract: DEFAULT_WHITELIST_CONTRACT,
            collection_contract,
            mint_price_wei: U256::from(DEFAULT_MINT_PRICE_WEI),
            phase_poll_interval: Duration::from_secs(5),
            receipt_poll_interval: Duration::from_millis(2000),
            receipt_timeout: Duration::from_secs(300),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let collection_contract = lookup("NFT_CONTRACT_ADDRESS")
            .ok_or_else(|| AppError::Config("NFT_CONTRACT_ADDRESS must be set in environment".to_string()))
            .and_then(|raw| parse_var("NFT_CONTRACT_ADDRESS", &raw))?;

        let defaults = Self::new(collection_contract);

        Ok(Self {
            wallet_rpc_url: lookup("WALLET_RPC_URL").unwrap_or(defaults.wallet_rpc_url),
            chain_id: parse_or(&lookup, "CHAIN_ID", defaults.chain_id)?,
            chain_name: lookup("CHAIN_NAME").unwrap_or(defaults.chain_name),
            whitelist_contract: parse_or(&lookup, "WHITELIST_CONTRACT_ADDRESS", defaults.whitelist_contract)?,
            collection_contract,
            mint_price_wei: parse_or(&lookup, "MINT_PRICE_WEI", defaults.mint_price_wei)?,
            phase_poll_interval: Duration::from_secs(parse_or(
                &lookup,
                "PHASE_POLL_INTERVAL_SECS",
                defaults.phase_poll_interval.as_secs(),
            )?),
            receipt_poll_interval: Duration::from_millis(parse_or(
                &lookup,
                "RECEIPT_POLL_INTERVAL_MS",
                defaults.receipt_poll_interval.as_millis() as u64,
            )?),
            receipt_timeout: Duration::from_secs(parse_or(
                &lookup,
                "RECEIPT_TIMEOUT_SECS",
                defaults.receipt_timeout.as_secs(),
            )?),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.wallet_rpc_url.starts_with("http://") || self.wallet_rpc_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "WALLET_RPC_URL must be an http(s) URL, got {}",
                self.wallet_rpc_url
            )));
        }

        if self.collection_contract == Address::ZERO {
            return Err(AppError::Config("NFT_CONTRACT_ADDRESS must not be the zero address".to_string()));
        }

        let poll_secs = self.phase_poll_interval.as_secs();
        if !(1..=300).contains(&poll_secs) {
            return Err(AppError::Config(
                "PHASE_POLL_INTERVAL_SECS must be between 1 and 300".to_string(),
            ));
        }

        if self.receipt_poll_interval.is_zero() || self.receipt_timeout < self.receipt_poll_interval {
            return Err(AppError::Config(
                "RECEIPT_TIMEOUT_SECS must be longer than RECEIPT_POLL_INTERVAL_MS".to_string(),
            ));
        }

        Ok(())
    }
}

/// Metadata server configuration.
#[derive(Clone, Debug)]
pub struct MetadataConfig {
    /// Listen address (e.g., "127.0.0.1:3001")
    pub bind_address: String,

    /// Allowed CORS origins; empty allows any origin
    pub allowed_origins: Vec<String>,

    /// Prefix of every image URL; `{token_id}.png` is appended verbatim
    pub image_base: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_METADATA_BIND_ADDRESS.to_string(),
            allowed_origins: Vec::new(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }
}

impl MetadataConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let image_base = lookup("METADATA_IMAGE_BASE").unwrap_or(defaults.image_base);
        if image_base.trim().is_empty() {
            return Err(AppError::Config("METADATA_IMAGE_BASE must not be empty".to_string()));
        }

        let bind_address = lookup("METADATA_BIND_ADDRESS").unwrap_or(defaults.bind_address);
        parse_var::<std::net::SocketAddr>("METADATA_BIND_ADDRESS", &bind_address)?;

        // Comma-separated, blanks ignored
        let allowed_origins = lookup("METADATA_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_address: bind_address.trim().to_string(),
            allowed_origins,
            image_base,
        })
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| AppError::Config(format!("{name} must be valid: {e}")))
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => parse_var(name, &raw),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const COLLECTION: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = ChainConfig::from_lookup(lookup_from(&[("NFT_CONTRACT_ADDRESS", COLLECTION)])).unwrap();

        assert_eq!(config.chain_id, 4);
        assert_eq!(config.chain_name, "Rinkeby");
        assert_eq!(config.whitelist_contract, DEFAULT_WHITELIST_CONTRACT);
        assert_eq!(config.mint_price_wei, U256::from(10_000_000_000_000_000u64));
        assert_eq!(config.phase_poll_interval, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_collection_address_required() {
        let err = ChainConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_overrides_parsed() {
        let config = ChainConfig::from_lookup(lookup_from(&[
            ("NFT_CONTRACT_ADDRESS", COLLECTION),
            ("CHAIN_ID", "11155111"),
            ("CHAIN_NAME", "Sepolia"),
            ("MINT_PRICE_WEI", "20000000000000000"),
            ("PHASE_POLL_INTERVAL_SECS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.chain_id, 11_155_111);
        assert_eq!(config.chain_name, "Sepolia");
        assert_eq!(config.mint_price_wei, U256::from(20_000_000_000_000_000u64));
        assert_eq!(config.phase_poll_interval, Duration::from_secs(12));
    }

    #[test]
    fn test_malformed_value_rejected() {
        let err = ChainConfig::from_lookup(lookup_from(&[
            ("NFT_CONTRACT_ADDRESS", COLLECTION),
            ("CHAIN_ID", "rinkeby"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("CHAIN_ID"));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = ChainConfig::new(COLLECTION.parse().unwrap());
        config.phase_poll_interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_collection() {
        let config = ChainConfig::new(Address::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_metadata_config_default_and_override() {
        let default = MetadataConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(default.image_base, DEFAULT_IMAGE_BASE);

        let custom = MetadataConfig::from_lookup(lookup_from(&[("METADATA_IMAGE_BASE", "https://cdn.example/")])).unwrap();
        assert_eq!(custom.image_base, "https://cdn.example/");

        assert!(MetadataConfig::from_lookup(lookup_from(&[("METADATA_IMAGE_BASE", "  ")])).is_err());
    }

    #[test]
    fn test_metadata_server_settings() {
        let default = MetadataConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(default.bind_address, DEFAULT_METADATA_BIND_ADDRESS);
        assert!(default.allowed_origins.is_empty());

        let custom = MetadataConfig::from_lookup(lookup_from(&[
            ("METADATA_BIND_ADDRESS", "0.0.0.0:8080"),
            ("METADATA_ALLOWED_ORIGINS", "https://opensea.io, ,https://looksrare.org"),
        ]))
        .unwrap();
        assert_eq!(custom.bind_address, "0.0.0.0:8080");
        assert_eq!(custom.allowed_origins, vec!["https://opensea.io", "https://looksrare.org"]);

        let err = MetadataConfig::from_lookup(lookup_from(&[("METADATA_BIND_ADDRESS", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("METADATA_BIND_ADDRESS"));
    }
}

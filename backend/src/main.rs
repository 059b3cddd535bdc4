//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.
//!
//! Environment:
//! - `METADATA_BIND_ADDRESS` (default `127.0.0.1:3001`)
//! - `METADATA_IMAGE_BASE` (default: the collection's hosted image folder)
//! - `METADATA_ALLOWED_ORIGINS` comma-separated; unset allows any origin
//! - `LOG_LEVEL` (default `info`)

use lib_core::MetadataConfig;
use lib_web::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    start_server(MetadataConfig::from_env()?).await
}

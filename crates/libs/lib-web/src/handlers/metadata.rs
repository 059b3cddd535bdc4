//! # Metadata Handlers
//!
//! Serves the ERC-721 metadata document a marketplace fetches from the collection's
//! `tokenURI`. The document is derived from the path segment alone: no lookup, no
//! validation, every id gets a document.
//!
//! ```bash
//! curl http://localhost:3001/api/7
//! ```

use crate::server::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use shared::TokenMetadata;
use tracing::{debug, instrument};

/// Metadata for `token_id`.
///
/// **Route**: `GET /api/{token_id}`
///
/// Success (200): `Json<TokenMetadata>`
#[instrument(skip(state))]
pub async fn get_token_metadata(State(state): State<AppState>, Path(token_id): Path<String>) -> Json<TokenMetadata> {
    debug!("Building metadata document");
    Json(TokenMetadata::for_token(&token_id, &state.metadata.image_base))
}

//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the metadata server and its clients
//! (the desktop mint terminal, marketplaces that resolve `tokenURI`).
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::metadata`]**: Token metadata records served by `GET /api/{token_id}`
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format `0x` wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! DTOs serialize with the default `serde` behavior, so field names are the
//! snake_case Rust names. The metadata record only uses single-word fields
//! (`name`, `description`, `image`), which is the shape marketplaces expect.
//!
//! ## Usage in Backend
//!
//! ```rust,ignore
//! use shared::dto::metadata::TokenMetadata;
//! use axum::{extract::Path, Json};
//!
//! async fn metadata(Path(token_id): Path<String>) -> Json<TokenMetadata> {
//!     Json(TokenMetadata::for_token(&token_id, "https://example.org/img/"))
//! }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;

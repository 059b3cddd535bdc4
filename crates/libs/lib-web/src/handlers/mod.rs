//! # HTTP Request Handlers
//!
//! - **[`metadata`]**: token metadata documents
//!   - `GET /api/{token_id}` - name, description and image for a token
//!
//! Unmatched routes fall through to [`lib_core::AppError::NotFound`], which renders as a
//! JSON [`shared::ErrorResponse`].

pub mod metadata;

//! # Web Library
//!
//! The token metadata HTTP service: handlers, middleware and server startup.
//!
//! ## Endpoints
//!
//! - `GET /api/{token_id}` - ERC-721 metadata document for a token
//! - `GET /health` - liveness probe
//!
//! ```bash
//! curl http://127.0.0.1:3001/api/7
//! # {"name":"NFT Neighbor #7","description":"...","image":".../7.png"}
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{create_router, start_server, AppState};

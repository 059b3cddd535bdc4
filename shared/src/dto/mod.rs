//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged over the REST API.
//!
//! ## Module Organization
//!
//! - [`metadata`] - Token metadata record and error body
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/7
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "name": "NFT Neighbor #7",
//!   "description": "NFT Neighbors is a DAO focused on bringing bluechip projects to the people.",
//!   "image": "https://raw.githubusercontent.com/petertardif/sampleNFT/main/public/nftneighbors/7.png"
//! }
//! ```

pub mod metadata;

pub use metadata::*;

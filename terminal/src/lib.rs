//! # NFT Neighbors Mint Terminal - Library Root
//!
//! Native desktop client for the NFT Neighbors allowlist and mint. This library
//! crate holds every module used by the binary (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toasts for alerts and tx outcomes    │
//! │  Tokio          - Async runtime for chain calls        │
//! │  lib-chain      - Wallet JSON-RPC and contract ABIs    │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ EIP-1193 over HTTP JSON-RPC
//!                          ▼
//!              ┌─────────────────────────┐
//!              │   Wallet / Node         │
//!              │   (allowlist + NFT)     │
//!              └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: state, events, handlers, async tasks, phase poller, view reducers
//! - **core**: error types and the [`PhaseSource`](core::PhaseSource) seam
//! - **services**: wallet session and contract service
//! - **ui**: screens and widgets
//! - **debug**: file logging and panic hook
//! - **utils**: the shared Tokio runtime
//!
//! ## Event-Driven Architecture
//!
//! Clicks go through `App::handle_*_click`, which update state and spawn a task.
//! Tasks report back with an [`AppEvent`]; `App::on_tick` drains the channel every
//! frame and the event handler applies each result to [`AppState`].

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Page};
pub use core::{AppError, Result};

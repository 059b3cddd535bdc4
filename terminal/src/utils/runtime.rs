//! Global Tokio runtime
//!
//! eframe drives the UI on the main thread without an async executor, so chain
//! calls run on this runtime. `main` enters it before the window opens, which lets
//! handlers call `tokio::spawn` directly from the UI thread.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("nft-neighbors-rt")
        .build()
        .unwrap_or_else(|e| panic!("Failed to create Tokio runtime: {e}"))
});

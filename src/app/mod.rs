//! Application module structure for OverlayApp
//!
//! - `core`: OverlayApp struct, feed thread startup and shutdown
//! - `update`: Per-frame update loop and global shortcuts

pub mod core;
pub mod update;

// Re-export OverlayApp for public API
pub use core::OverlayApp;

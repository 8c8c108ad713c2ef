//! Overlay Chat library.
//!
//! Chat log buffer with sender coalescing, the panel fade state machine, and
//! the egui overlay that hosts them.

pub mod app;
pub mod buffer;
pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod panel;
pub mod protocol;
pub mod render;
pub mod sanitize;
pub mod ui;
pub mod visibility;

mod integration_tests;

pub use error::{Error, Result};

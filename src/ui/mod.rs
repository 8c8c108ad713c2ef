//! UI rendering modules
//!
//! This module contains the egui side of the overlay:
//! - `chat_log`: Row renderer and chat panel drawing
//! - `notices`: Floating notice toasts

pub mod chat_log;
pub mod notices;

//! Overlay Chat - an in-game style chat log overlay built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the chat panel
//! - Feed thread: runs a Tokio runtime that plays scripted chat messages
//! - Communication via crossbeam channels

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use overlay_chat::app::OverlayApp;
use overlay_chat::config::{load_settings, save_settings, ChatSettings};
use overlay_chat::feed::{parse_script, DEFAULT_INTERVAL, DEFAULT_SCRIPT};
use overlay_chat::{Error, Result};

#[derive(Parser)]
#[command(name = "overlay-chat")]
#[command(about = "In-game chat log overlay with a scripted message feed")]
struct Cli {
    /// Start with chat silenced (shows a notice)
    #[arg(long)]
    silence: bool,

    /// Milliseconds between scripted messages
    #[arg(long, default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Feed script, one `sender|#rrggbb|text` per line
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Persist the effective settings before starting
    #[arg(long)]
    save_settings: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut settings = load_settings().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings, using defaults: {}", e);
        ChatSettings::default()
    });
    if cli.silence {
        settings.silence_chat = true;
    }
    if cli.save_settings {
        save_settings(&settings)?;
    }

    let script = match &cli.script {
        Some(path) => parse_script(&std::fs::read_to_string(path)?)?,
        None => parse_script(DEFAULT_SCRIPT)?,
    };
    let interval = Duration::from_millis(cli.interval_ms.max(1));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Overlay Chat",
        options,
        Box::new(move |cc| Ok(Box::new(OverlayApp::new(cc, settings, script, interval)))),
    )
    .map_err(|e| Error::Ui(e.to_string()))
}

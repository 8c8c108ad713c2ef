//! Core OverlayApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui::{self, Color32};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::ChatSettings;
use crate::feed::{run_feed, FeedLine};
use crate::panel::ChatPanel;
use crate::protocol::{FeedAction, FeedEvent};
use crate::ui::chat_log::EguiLogRenderer;

/// Color of lines typed by the local player
pub const LOCAL_COLOR: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x40);

pub struct OverlayApp {
    pub panel: ChatPanel<EguiLogRenderer>,
    pub settings: ChatSettings,

    // Channels for feed communication
    pub action_tx: Sender<FeedAction>,
    pub event_rx: Receiver<FeedEvent>,

    /// Time of the previous frame, for fade and idle timing
    pub(super) last_frame: Instant,
}

impl OverlayApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: ChatSettings,
        script: Vec<FeedLine>,
        interval: Duration,
    ) -> Self {
        // Create channels for UI <-> feed
        let (action_tx, action_rx) = unbounded::<FeedAction>();
        let (event_tx, event_rx) = unbounded::<FeedEvent>();

        // Spawn the feed thread
        thread::spawn(move || {
            run_feed(script, interval, action_rx, event_tx);
        });

        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut panel = ChatPanel::new(EguiLogRenderer::new(), &settings);
        panel.show();

        Self {
            panel,
            settings,
            action_tx,
            event_rx,
            last_frame: Instant::now(),
        }
    }

    /// Log a line typed by the local player.
    pub(super) fn send_local(&mut self, line: &str) {
        let sender = self.settings.player_name.clone();
        self.panel.receive(&sender, line, LOCAL_COLOR);
    }
}

impl Drop for OverlayApp {
    fn drop(&mut self) {
        // Feed may already be finished; nothing to do then
        let _ = self.action_tx.send(FeedAction::Stop);
    }
}

//! Scripted message feed standing in for the game's network layer.
//!
//! Runs on its own thread with a Tokio runtime and hands messages to the UI
//! over crossbeam channels, one per interval tick.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui::Color32;
use tokio::runtime::Builder;

use crate::error::{Error, Result};
use crate::protocol::{FeedAction, FeedEvent};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1500);

/// Script played when no file is given.
pub const DEFAULT_SCRIPT: &str = "\
// sender|color|text
|#ffd700|Welcome aboard. Press Enter to chat.
Ryley|#7fdbff|anyone near the lifepod?
Ryley|#7fdbff|found some copper here
Marguerit|#ff851b|heading to the kelp forest
Ryley|#7fdbff|wait for me
|#ffd700|Marguerit picked up a Stalker Tooth
Marguerit|#ff851b|got it
Marguerit|#ff851b|   back at base in 5   
";

/// One scripted chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedLine {
    pub sender: String,
    pub color: Color32,
    pub text: String,
}

/// Parse `#rrggbb` into a color.
pub fn parse_color(hex: &str) -> Option<Color32> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Parse a feed script: one `sender|color|text` per line. Blank lines and
/// lines starting with `//` are skipped; the sender may be empty.
pub fn parse_script(src: &str) -> Result<Vec<FeedLine>> {
    let mut lines = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with("//") {
            continue;
        }

        let mut parts = raw.splitn(3, '|');
        let (Some(sender), Some(color), Some(text)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::FeedLine {
                line: line_no,
                reason: "expected sender|color|text".into(),
            });
        };
        let color = parse_color(color).ok_or_else(|| Error::FeedLine {
            line: line_no,
            reason: format!("invalid color {:?}", color),
        })?;

        lines.push(FeedLine {
            sender: sender.trim().to_string(),
            color,
            text: text.replace("\\n", "\n"),
        });
    }
    Ok(lines)
}

/// Play `lines` into `event_tx`, one per `interval`, until the script ends or
/// a [`FeedAction::Stop`] arrives. Always finishes with [`FeedEvent::Finished`].
pub fn run_feed(
    lines: Vec<FeedLine>,
    interval: Duration,
    action_rx: Receiver<FeedAction>,
    event_tx: Sender<FeedEvent>,
) {
    let rt = match Builder::new_current_thread().enable_time().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to start feed runtime: {}", e);
            let _ = event_tx.send(FeedEvent::Finished);
            return;
        }
    };

    rt.block_on(async move {
        tracing::info!(lines = lines.len(), interval_ms = interval.as_millis() as u64, "feed started");
        let mut ticker = tokio::time::interval(interval);

        for line in lines {
            ticker.tick().await;

            if let Ok(FeedAction::Stop) = action_rx.try_recv() {
                tracing::info!("feed stopped");
                break;
            }

            let event = FeedEvent::Message {
                sender: line.sender,
                text: line.text,
                color: line.color,
            };
            if event_tx.send(event).is_err() {
                // UI side hung up
                return;
            }
        }

        let _ = event_tx.send(FeedEvent::Finished);
        tracing::info!("feed finished");
    });
}

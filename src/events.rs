//! Feed event processing (incoming chat messages).

use crossbeam_channel::Receiver;

use crate::panel::ChatPanel;
use crate::protocol::FeedEvent;
use crate::render::LogRenderer;

/// Drain every pending feed event into the panel.
///
/// Returns the number of chat messages logged.
pub fn process_events<R: LogRenderer>(event_rx: &Receiver<FeedEvent>, panel: &mut ChatPanel<R>) -> usize {
    let mut received = 0;
    while let Ok(event) = event_rx.try_recv() {
        match event {
            FeedEvent::Message { sender, text, color } => {
                let kind = panel.receive(&sender, &text, color);
                tracing::trace!(sender = %sender, ?kind, "chat message");
                received += 1;
            }
            FeedEvent::Finished => {
                tracing::debug!("message feed finished");
            }
        }
    }
    received
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AppendKind;
    use crate::config::ChatSettings;
    use crate::render::testing::RecordingRenderer;
    use crossbeam_channel::unbounded;
    use eframe::egui::Color32;

    fn message(sender: &str, text: &str) -> FeedEvent {
        FeedEvent::Message {
            sender: sender.into(),
            text: text.into(),
            color: Color32::WHITE,
        }
    }

    #[test]
    fn test_process_events_drains_channel() {
        let (tx, rx) = unbounded();
        let mut panel = ChatPanel::new(RecordingRenderer::default(), &ChatSettings::default());

        tx.send(message("alice", "hi")).unwrap();
        tx.send(message("alice", "again")).unwrap();
        tx.send(message("bob", "yo")).unwrap();
        tx.send(FeedEvent::Finished).unwrap();

        assert_eq!(process_events(&rx, &mut panel), 3);
        assert!(rx.is_empty());
        assert_eq!(panel.buffer().len(), 2);
        assert_eq!(panel.renderer().refreshed.len(), 1);

        // Nothing pending: no-op
        assert_eq!(process_events(&rx, &mut panel), 0);
        assert_eq!(panel.receive("bob", "still here", Color32::WHITE), AppendKind::Merged);
    }
}

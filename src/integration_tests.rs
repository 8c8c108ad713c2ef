//! Integration tests for overlay-chat
//!
//! These tests exercise full workflows across modules: feed script → channel
//! → event processing → chat panel → renderer, plus the panel's visibility
//! lifecycle as the host would drive it frame by frame.

#[cfg(test)]
mod integration_tests {
    use crate::buffer::{AppendKind, MESSAGES_LIMIT};
    use crate::config::ChatSettings;
    use crate::events::process_events;
    use crate::feed::{parse_script, run_feed};
    use crate::panel::ChatPanel;
    use crate::protocol::{FeedAction, FeedEvent};
    use crate::render::testing::RecordingRenderer;
    use crate::sanitize::LINE_CHAR_LIMIT;
    use crate::visibility::FadeState;
    use crossbeam_channel::unbounded;
    use eframe::egui::Color32;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    /// Scripted feed delivered through the channel ends up coalesced in the log
    #[test]
    fn test_feed_to_panel_workflow() {
        let script = parse_script(
            "Alice|#ff0000|hi\n\
             Alice|#ff0000|  there  \n\
             Bob|#0000ff|hey\n\
             |#ffd700|Alice disconnected\n\
             Alice|#ff0000|back",
        )
        .unwrap();

        let (_action_tx, action_rx) = unbounded::<FeedAction>();
        let (event_tx, event_rx) = unbounded::<FeedEvent>();
        run_feed(script, Duration::from_millis(1), action_rx, event_tx);

        let mut panel = ChatPanel::new(RecordingRenderer::default(), &ChatSettings::default());
        assert_eq!(process_events(&event_rx, &mut panel), 5);

        let entries: Vec<(&str, &str)> = panel
            .buffer()
            .iter()
            .map(|e| (e.sender_name.as_str(), e.text.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("Alice", "hi\nthere"),
                ("Bob", "hey"),
                ("", "Alice disconnected"),
                ("Alice", "back"),
            ]
        );
        assert_eq!(panel.renderer().created.len(), 4);
        assert_eq!(panel.renderer().refreshed.len(), 1);
    }

    /// A long session keeps the log bounded and releases exactly the evicted rows
    #[test]
    fn test_long_session_stays_bounded() {
        let mut panel = ChatPanel::new(RecordingRenderer::default(), &ChatSettings::default());
        let senders = ["a", "a", "b", "c", "c", "c", "d"];
        for i in 0..500 {
            let sender = senders[i % senders.len()];
            panel.receive(sender, &format!("message {}", i), Color32::WHITE);
            assert!(panel.buffer().len() <= MESSAGES_LIMIT);
        }

        let r = panel.renderer();
        assert_eq!(r.created.len() - r.disposed.len(), panel.buffer().len());
        // Rows are released oldest first
        let mut sorted = r.disposed.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, r.disposed);
    }

    /// Oversized messages are cut per segment, never rejected
    #[test]
    fn test_oversized_messages_are_truncated() {
        let mut panel = ChatPanel::new(RecordingRenderer::default(), &ChatSettings::default());
        let long = "z".repeat(1000);
        assert_eq!(panel.receive("spam", &long, Color32::WHITE), AppendKind::Created);
        assert_eq!(panel.receive("spam", &long, Color32::WHITE), AppendKind::Merged);

        let entry = panel.buffer().last().unwrap();
        for segment in entry.text.split('\n') {
            assert_eq!(segment.chars().count(), LINE_CHAR_LIMIT);
        }
    }

    /// Show, idle out, show again, and hide mid fade-in
    #[test]
    fn test_visibility_lifecycle() {
        let mut panel = ChatPanel::new(RecordingRenderer::default(), &ChatSettings::default());
        assert_eq!(panel.visibility().state(), FadeState::Hidden);

        panel.show();
        let mut frames = 0;
        while panel.update(FRAME) != FadeState::Visible {
            frames += 1;
            assert!(frames < 200, "fade-in never finished");
        }
        assert_eq!(panel.visibility().opacity(), 1.0);

        // Idle until the panel hides itself, then until it is fully hidden
        let mut frames = 0;
        while panel.visibility().state() != FadeState::Hidden {
            panel.update(FRAME);
            frames += 1;
            assert!(frames < 1000, "panel never hid");
        }
        assert_eq!(panel.visibility().opacity(), 0.0);

        panel.show();
        for _ in 0..20 {
            panel.update(FRAME);
        }
        panel.hide();
        let mut previous = panel.visibility().opacity();
        while panel.update(FRAME) != FadeState::Hidden {
            assert!(panel.visibility().opacity() <= previous);
            previous = panel.visibility().opacity();
        }
        assert_eq!(panel.visibility().opacity(), 0.0);
    }

    /// Transparency toggles are independent of show/hide
    #[test]
    fn test_transparency_survives_fades() {
        let mut panel = ChatPanel::new(RecordingRenderer::default(), &ChatSettings::default());
        assert!(panel.toggle_transparency());
        panel.show();
        for _ in 0..150 {
            panel.update(FRAME);
        }
        panel.hide();
        for _ in 0..150 {
            panel.update(FRAME);
        }
        assert!(panel.visibility().is_transparent());
        assert!(!panel.toggle_transparency());
    }
}

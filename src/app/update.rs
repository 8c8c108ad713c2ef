//! Main update loop and global shortcuts

use eframe::egui;
use std::time::{Duration, Instant};

use super::OverlayApp;
use crate::events::process_events;
use crate::ui;
use crate::ui::chat_log::CHAT_INPUT_ID;
use crate::visibility::FadeDirection;

/// Notices disappear after this many seconds
const NOTICE_TTL_SECS: u64 = 5;

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process feed events
        process_events(&self.event_rx, &mut self.panel);

        let input_focused = self.panel.is_focused();
        let (open, close, toggle_transparency, toggle_pin, clear) = ctx.input(|i| {
            (
                // Enter: open chat and focus the input
                i.key_pressed(egui::Key::Enter) && !input_focused,
                // Escape: hide chat
                i.key_pressed(egui::Key::Escape),
                // Ctrl+T: Toggle background transparency
                i.modifiers.ctrl && i.key_pressed(egui::Key::T),
                // Ctrl+P: Toggle pin
                i.modifiers.ctrl && i.key_pressed(egui::Key::P),
                // Ctrl+L: Clear the log
                i.modifiers.ctrl && i.key_pressed(egui::Key::L),
            )
        });

        let input_id = egui::Id::new(CHAT_INPUT_ID);
        if open {
            self.panel.show();
            ctx.memory_mut(|m| m.request_focus(input_id));
        }
        if close {
            self.panel.hide();
            ctx.memory_mut(|m| m.surrender_focus(input_id));
        }
        if toggle_transparency {
            self.panel.toggle_transparency();
        }
        if toggle_pin {
            self.panel.toggle_pin();
        }
        if clear {
            self.panel.clear();
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.panel.update(dt);
        self.panel.renderer_mut().purge_old_notices(NOTICE_TTL_SECS);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::from_rgb(12, 40, 60)))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Enter: chat   Esc: hide   Ctrl+T: transparency   Ctrl+P: pin   Ctrl+L: clear")
                        .color(egui::Color32::LIGHT_GRAY),
                );
            });

        let response = ui::chat_log::render_chat_panel(ctx, &mut self.panel);
        if let Some(line) = response.submitted {
            self.send_local(&line);
        }
        if response.toggled_transparency {
            self.panel.toggle_transparency();
        }
        if response.toggled_pin {
            self.panel.toggle_pin();
        }

        ui::notices::render_notices(ctx, &self.panel.renderer().notices);

        // Keep animating while a fade runs; otherwise poll for feed events
        if self.panel.visibility().direction() != FadeDirection::None {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

//! egui rendering of the chat panel.
//!
//! `EguiLogRenderer` keeps one row per log entry, keyed by `RowId`, and
//! `render_chat_panel` draws them in the bottom-left corner with the panel's
//! fade opacity and background alpha applied.

use std::collections::BTreeMap;
use std::time::Instant;

use eframe::egui::{self, Color32};

use crate::buffer::LogEntry;
use crate::panel::ChatPanel;
use crate::render::LogRenderer;

pub const CHAT_INPUT_ID: &str = "chat_input";

const PANEL_WIDTH: f32 = 420.0;
const LOG_HEIGHT: f32 = 220.0;
/// Background alpha at full opacity, before the transparency toggle applies
const BACKGROUND_ALPHA: f32 = 200.0;

/// Row identifier handed to the chat panel. Ids increase monotonically, so
/// ordering by id is chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u64);

/// One visual row of the log
#[derive(Clone, Debug)]
pub struct LogRow {
    pub sender: String,
    pub text: String,
    pub color: Color32,
    /// Local time of the last message, "HH:MM"
    pub time: String,
}

impl LogRow {
    fn from_entry<H>(entry: &LogEntry<H>) -> Self {
        Self {
            sender: entry.sender_name.clone(),
            text: entry.text.clone(),
            color: entry.color,
            time: entry.last_updated.format("%H:%M").to_string(),
        }
    }
}

#[derive(Default)]
pub struct EguiLogRenderer {
    next_id: u64,
    rows: BTreeMap<RowId, LogRow>,
    /// Notices with creation time (auto-expire)
    pub notices: Vec<(String, Instant)>,
}

impl EguiLogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> impl Iterator<Item = &LogRow> {
        self.rows.values()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Drop notices older than the given age.
    pub fn purge_old_notices(&mut self, max_age_secs: u64) {
        self.notices
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

impl LogRenderer for EguiLogRenderer {
    type Handle = RowId;

    fn create(&mut self, entry: &LogEntry<RowId>) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.insert(id, LogRow::from_entry(entry));
        id
    }

    fn refresh(&mut self, handle: &RowId, entry: &LogEntry<RowId>) {
        if let Some(row) = self.rows.get_mut(handle) {
            *row = LogRow::from_entry(entry);
        }
    }

    fn dispose(&mut self, handle: RowId) {
        self.rows.remove(&handle);
    }

    fn notice(&mut self, text: &str) {
        tracing::info!(notice = text, "chat notice");
        self.notices.push((text.to_string(), Instant::now()));
    }
}

/// What the user did with the panel this frame.
#[derive(Default, Debug)]
pub struct PanelResponse {
    /// A line submitted from the input field
    pub submitted: Option<String>,
    pub toggled_transparency: bool,
    pub toggled_pin: bool,
}

/// Draw the chat panel if any of it is visible.
pub fn render_chat_panel(ctx: &egui::Context, panel: &mut ChatPanel<EguiLogRenderer>) -> PanelResponse {
    let mut response = PanelResponse::default();
    if !panel.visibility().is_shown() {
        panel.set_focused(false);
        return response;
    }

    let opacity = panel.visibility().opacity();
    let background = panel.visibility().background_alpha();
    let fill = Color32::from_black_alpha((BACKGROUND_ALPHA * background) as u8);

    egui::Area::new(egui::Id::new("chat_panel"))
        .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -12.0])
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            egui::Frame::new()
                .fill(fill)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.set_width(PANEL_WIDTH);
                    render_rows(ui, panel.renderer());
                    ui.add_space(6.0);
                    render_input_row(ui, panel, &mut response);
                });
        });

    response
}

fn render_rows(ui: &mut egui::Ui, renderer: &EguiLogRenderer) {
    egui::ScrollArea::vertical()
        .max_height(LOG_HEIGHT)
        .auto_shrink([false, true])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for row in renderer.rows() {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    ui.label(
                        egui::RichText::new(&row.time)
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                    if row.sender.is_empty() {
                        // System line: the whole text takes the entry color
                        ui.label(egui::RichText::new(&row.text).color(row.color));
                    } else {
                        ui.label(
                            egui::RichText::new(format!("{}:", row.sender))
                                .strong()
                                .color(row.color),
                        );
                        ui.label(egui::RichText::new(&row.text).color(Color32::WHITE));
                    }
                });
            }
        });
}

fn render_input_row(ui: &mut egui::Ui, panel: &mut ChatPanel<EguiLogRenderer>, response: &mut PanelResponse) {
    ui.horizontal(|ui| {
        let pin_label = if panel.is_pinned() { "Unpin" } else { "Pin" };
        if ui.small_button(pin_label).clicked() {
            response.toggled_pin = true;
        }
        if ui.small_button("Fade").clicked() {
            response.toggled_transparency = true;
        }

        let edit = egui::TextEdit::singleline(panel.input_mut())
            .id(egui::Id::new(CHAT_INPUT_ID))
            .hint_text("Say something...")
            .desired_width(f32::INFINITY);
        let input = ui.add(edit);

        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submitted {
            response.submitted = panel.take_input();
        }
        panel.set_focused(input.has_focus());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::MESSAGES_LIMIT;
    use crate::config::ChatSettings;

    fn panel() -> ChatPanel<EguiLogRenderer> {
        ChatPanel::new(EguiLogRenderer::new(), &ChatSettings::default())
    }

    #[test]
    fn test_rows_follow_the_log() {
        let mut panel = panel();
        panel.receive("Alice", "hi", Color32::RED);
        panel.receive("Alice", "there", Color32::RED);
        panel.receive("", "server restarting", Color32::YELLOW);

        let rows: Vec<&LogRow> = panel.renderer().rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sender, "Alice");
        assert_eq!(rows[0].text, "hi\nthere");
        assert_eq!(rows[0].color, Color32::RED);
        assert_eq!(rows[1].sender, "");
        assert_eq!(rows[1].time.len(), 5);
    }

    #[test]
    fn test_evicted_rows_are_removed() {
        let mut panel = panel();
        for i in 0..MESSAGES_LIMIT + 3 {
            panel.receive(&format!("p{}", i), "x", Color32::WHITE);
        }
        assert_eq!(panel.renderer().row_count(), MESSAGES_LIMIT);
        assert_eq!(panel.renderer().rows().next().map(|r| r.sender.as_str()), Some("p3"));
    }

    #[test]
    fn test_notices_expire() {
        let settings = ChatSettings {
            silence_chat: true,
            ..Default::default()
        };
        let mut silenced = ChatPanel::new(EguiLogRenderer::new(), &settings);
        assert_eq!(silenced.renderer().notices.len(), 1);

        silenced.renderer_mut().purge_old_notices(60);
        assert_eq!(silenced.renderer().notices.len(), 1);
        silenced.renderer_mut().purge_old_notices(0);
        assert!(silenced.renderer().notices.is_empty());
    }
}

//! Notice toasts - floating messages in the top-right corner.

use eframe::egui;

/// Render floating notice toasts (top-right corner).
///
/// # Arguments
/// * `ctx` - The egui context
/// * `notices` - List of (message, timestamp) pairs
pub fn render_notices(ctx: &egui::Context, notices: &[(String, std::time::Instant)]) {
    if notices.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notice_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 230))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for (msg, _created) in notices {
                        ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_YELLOW));
                    }
                });
        });
}

// src/gui/components/alert.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

const ERROR_FILL: Color32 = Color32::from_rgb(0x5A, 0x1E, 0x1E);
const ERROR_TEXT: Color32 = Color32::from_rgb(0xFF, 0xB4, 0xB4);

/// Inline fetch error with a Retry button. Nothing is drawn when healthy.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(msg) = app.poller.error().map(str::to_owned) else { return };

    let mut retry = false;
    egui::Frame::new()
        .fill(ERROR_FILL)
        .inner_margin(8.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Connection Error:").strong().color(ERROR_TEXT));
                ui.label(RichText::new(&msg).color(ERROR_TEXT));
                retry = ui.small_button("Retry").clicked();
            });
        });

    if retry {
        logf!("UI: Retry after error: {}", msg);
        app.refresh();
    }
}

// src/gui/components/header.rs
//
// Title strip on top, "Refresh Now" strip at the bottom.

use eframe::egui::{self, RichText};

use crate::gui::app::{App, WINDOW_TITLE};

pub fn draw(ui: &mut egui::Ui, _app: &mut App) {
    ui.add_space(6.0);
    ui.heading(RichText::new(WINDOW_TITLE).strong());
    ui.label(RichText::new("Latest opportunities from Seek.com.au").weak());
    ui.add_space(6.0);
}

pub fn draw_footer(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Jobs automatically updated daily via scheduled scraping |");
        if ui.link("Refresh Now").clicked() {
            app.refresh();
        }
    });
}

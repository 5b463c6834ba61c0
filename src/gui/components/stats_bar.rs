// src/gui/components/stats_bar.rs
//
// Four summary cards over the unfiltered list: total, last 24 hours,
// distinct companies, and refresh status.

use chrono::Utc;
use eframe::egui::{self, RichText};

use crate::{gui::app::App, stats::JobStats, time};

const CARD_WIDTH: f32 = 150.0;

fn card(ui: &mut egui::Ui, add_value: impl FnOnce(&mut egui::Ui), label: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            add_value(ui);
            ui.label(RichText::new(label).weak());
        });
    });
}

fn number(ui: &mut egui::Ui, n: usize) {
    ui.label(RichText::new(n.to_string()).size(22.0).strong());
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let now = Utc::now();
    let stats = JobStats::compute(app.poller.jobs().jobs(), now);

    let updated = app
        .poller
        .last_update()
        .map(|t| time::format_last_update(t, now))
        .unwrap_or_default();
    let loading = app.poller.is_loading();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 10.0;

        card(ui, |ui| number(ui, stats.total), "Total Jobs");
        card(ui, |ui| number(ui, stats.last_24h), "Last 24 Hours");
        card(ui, |ui| number(ui, stats.companies), "Companies");
        card(
            ui,
            |ui| {
                if loading {
                    ui.spinner();
                } else {
                    ui.label(RichText::new("✓").size(22.0).strong());
                }
            },
            &format!("Updated {updated}"),
        );
    });
}

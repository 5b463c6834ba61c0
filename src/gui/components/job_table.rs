// src/gui/components/job_table.rs
//
// Draws the live job list for the current filter.
// Purely a view: derives a JobView from the poller's list each frame.

use chrono::Utc;
use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::JobView, gui::app::App, job::JobRecord, time};

const ROW_HEIGHT: f32 = 22.0;

/// (header, initial width); the last column takes the remainder.
const COLUMNS: &[(&str, f32)] = &[
    ("Title", 280.0),
    ("Posted", 80.0),
    ("Company", 180.0),
    ("Location", 150.0),
    ("Salary", 150.0),
    ("Job Type", 90.0),
    ("Description", 0.0),
];

fn tooltip(job: &JobRecord) -> String {
    let mut lines = vec![job.title.clone()];
    if let Some(c) = &job.classification { lines.push(format!("Classification: {c}")); }
    if let Some(s) = &job.subcategory { lines.push(format!("Subcategory: {s}")); }
    if let Some(p) = &job.posted_date { lines.push(format!("Posted: {p}")); }
    lines.push(format!("Scraped: {}", time::datetime_or_raw(&job.scraped_at)));
    if !job.job_id.is_empty() { lines.push(format!("Id: {}", job.job_id)); }
    lines.join("\n")
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = JobView::new(app.poller.jobs(), &app.state.gui.filter);

    // Very first load: nothing to show yet.
    if app.poller.is_loading() && view.total() == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.label("Loading jobs...");
        });
        return;
    }

    ui.label(RichText::new(format!("Showing {} of {} jobs", view.len(), view.total())).weak());

    if view.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label("No jobs found. Try adjusting your filters or start a new scrape.");
        });
        return;
    }

    // Reserve space for scroll bars instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let now = Utc::now();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .min_scrolled_height(0.0);

    for &(_, w) in &COLUMNS[..COLUMNS.len() - 1] {
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }
    table = table.column(Column::remainder().clip(true));

    table
        .header(24.0, |mut header| {
            for &(name, _) in COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, view.len(), |mut row| {
                let Some(job) = view.job(row.index()) else { return };

                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    // Opens in the system browser, new tab.
                    ui.add(
                        egui::Hyperlink::from_label_and_url(
                            RichText::new(&job.title).strong(),
                            &job.job_url,
                        )
                        .open_in_new_tab(true),
                    )
                    .on_hover_text(tooltip(job));
                });
                row.col(|ui| {
                    ui.label(time::relative_or_raw(&job.scraped_at, now));
                });
                row.col(|ui| {
                    ui.label(job.company.as_str());
                });
                row.col(|ui| {
                    ui.label(job.location.as_str());
                });
                row.col(|ui| {
                    if let Some(s) = &job.salary { ui.label(s.as_str()); }
                });
                row.col(|ui| {
                    if let Some(t) = &job.job_type { ui.label(t.as_str()); }
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    if let Some(d) = job.description_preview() {
                        ui.label(RichText::new(d).weak());
                    }
                });
            });
        });
}

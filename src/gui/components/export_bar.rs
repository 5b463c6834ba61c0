// src/gui/components/export_bar.rs
//
// Output dir + Export CSV / Copy for the rows currently on screen.

use eframe::egui;

use crate::{
    data::JobView,
    export,
    file,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Export to:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }
    });

    // --- Actions (Export CSV / Copy) ---
    ui.horizontal(|ui| {
        if ui.button("Export CSV").clicked() {
            export_csv(app);
        }

        if ui.button("Copy").clicked() {
            let view = JobView::new(app.poller.jobs(), &app.state.gui.filter);
            if view.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                match export::to_csv_string(&view.to_refs()) {
                    Ok(txt) => {
                        logf!("Copy: rows={}", view.len());
                        ui.ctx().copy_text(txt);
                        app.status(format!("Copied {} job(s) to clipboard", view.len()));
                    }
                    Err(e) => {
                        loge!("Copy: Error: {}", e);
                        app.status(format!("Copy error: {e}"));
                    }
                }
            }
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}

/// Write the filtered view to `<dir>/seek-jobs-<today>.csv`.
/// An empty view still exports (header only), same as the on-screen list.
fn export_csv(app: &mut App) {
    app.state.apply_out_dir_text();

    let view = JobView::new(app.poller.jobs(), &app.state.gui.filter);
    logf!(
        "Export: Begin rows={} of {}, dir={}",
        view.len(),
        view.total(),
        app.state.options.export.dir().display()
    );

    match file::write_export(&app.state.options.export, &view.to_refs(), file::export_date()) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            app.status(format!("Exported {} job(s) to {}", view.len(), path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}

// src/gui/components/filter_bar.rs
//
// Search box + location/company combos + Refresh.
// Edits go straight into state.gui.filter; the table re-derives its view
// every frame, so nothing else needs to be told.

use eframe::egui;

use crate::{facets::Facets, gui::app::App};

const ALL_LOCATIONS: &str = "All Locations";
const ALL_COMPANIES: &str = "All Companies";

/// Combo box over `values`, with "" standing for `all_label`.
fn facet_combo(
    ui: &mut egui::Ui,
    id: &str,
    all_label: &str,
    current: &mut String,
    values: &[String],
) -> bool {
    let shown = if current.is_empty() { all_label } else { current.as_str() };
    let mut changed = false;

    egui::ComboBox::from_id_salt(id)
        .selected_text(shown.to_owned())
        .width(200.0)
        .show_ui(ui, |ui| {
            changed |= ui.selectable_value(current, s!(), all_label).changed();
            for v in values {
                changed |= ui.selectable_value(current, v.clone(), v.as_str()).changed();
            }
        });

    changed
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Options come from the full list, not the filtered one.
    let facets = Facets::from_jobs(app.poller.jobs().jobs());

    let mut refresh = false;

    ui.horizontal_wrapped(|ui| {
        let filter = &mut app.state.gui.filter;

        let resp = ui.add(
            egui::TextEdit::singleline(&mut filter.search)
                .hint_text("Search jobs or companies...")
                .desired_width(260.0),
        );
        if resp.changed() {
            logd!("UI: search → {:?}", filter.search);
        }

        if facet_combo(ui, "location_filter", ALL_LOCATIONS, &mut filter.location, &facets.locations) {
            logf!("UI: location filter → {:?}", filter.location);
        }
        if facet_combo(ui, "company_filter", ALL_COMPANIES, &mut filter.company, &facets.companies) {
            logf!("UI: company filter → {:?}", filter.company);
        }

        ui.separator();

        refresh = ui.button("Refresh").clicked();
    });

    if refresh {
        app.refresh();
    }
}

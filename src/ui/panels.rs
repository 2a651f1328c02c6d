use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::aggregate::SliceLabel;
use crate::data::export::ChartExport;
use crate::data::loader::{self, DataSource};
use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the site dropdown and payload range selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch site");
    ui.separator();
    site_dropdown(ui, state);

    ui.add_space(12.0);
    ui.heading("Payload range (Kg)");
    ui.separator();
    payload_slider(ui, state);

    ui.add_space(12.0);
    ui.label(format!(
        "Observed payloads: {:.0} – {:.0} kg",
        state.table.min_payload(),
        state.table.max_payload()
    ));

    if let SiteSelection::Site(site) = &state.selection.site {
        ui.label(format!(
            "{site}: {} successes, {} failures",
            state.pie.count_for(&SliceLabel::Outcome(1)),
            state.pie.count_for(&SliceLabel::Outcome(0))
        ));
    }

    ui.add_space(12.0);
    ui.heading("Booster versions");
    ui.separator();
    for (label, color) in state.booster_colors.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
}

fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let current = state.selection.site.clone();
    let mut picked = None;

    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.config.label_for(current.as_str()))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in state.config.site_options {
                if ui
                    .selectable_label(current.as_str() == option.value, option.label)
                    .clicked()
                {
                    picked = Some(SiteSelection::parse(option.value));
                }
            }
        });

    if let Some(site) = picked {
        state.set_site(site);
    }
}

/// Two handles over one track; dragging a handle past the other pushes it along.
fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let config = &state.config;
    let track = config.slider_min..=config.slider_max.max(state.table.max_payload());
    let step = config.slider_step;

    let PayloadRange { mut min_kg, mut max_kg } = state.selection.payload_range;

    let min_changed = ui
        .add(
            egui::Slider::new(&mut min_kg, track.clone())
                .step_by(step)
                .text("min"),
        )
        .changed();
    let max_changed = ui
        .add(egui::Slider::new(&mut max_kg, track).step_by(step).text("max"))
        .changed();

    if min_changed && min_kg > max_kg {
        max_kg = min_kg;
    } else if max_changed && max_kg < min_kg {
        min_kg = max_kg;
    }

    if min_changed || max_changed {
        state.set_payload_range(PayloadRange::new(min_kg, max_kg));
    }

    if ui.small_button("Reset range").clicked() {
        let full = PayloadRange::of_table(&state.table);
        state.set_payload_range(full);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open local CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export chart data…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in payload range",
            state.table.len(),
            state.scatter.points.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load(&DataSource::Path(path)) {
            Ok(table) => state.set_table(table),
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart data")
        .add_filter("JSON", &["json"])
        .set_file_name("spacex_charts.json")
        .save_file();

    let Some(path) = file else {
        return;
    };

    let export = ChartExport {
        site: state.selection.site.as_str(),
        pie: &state.pie,
        scatter: &state.scatter,
    };
    match export.write_json(&path) {
        Ok(()) => {
            log::info!("Exported chart data to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export chart data: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

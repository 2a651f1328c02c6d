use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::outcome_color;
use crate::data::filter::filtered_records;
use crate::data::model::LaunchRecord;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Records table (below the scatter plot)
// ---------------------------------------------------------------------------

/// List the launches behind the scatter plot, in table order.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let rows: Vec<&LaunchRecord> = filtered_records(
        &state.table,
        &state.selection.site,
        state.selection.payload_range,
    )
    .collect();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Launch Site", "Payload Mass (kg)", "Outcome", "Booster Version"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let r = rows[row.index()];
                row.col(|ui| {
                    ui.label(&r.launch_site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.0}", r.payload_mass_kg));
                });
                row.col(|ui| {
                    let text = if r.is_success() { "1 (success)" } else { "0 (failure)" };
                    ui.label(RichText::new(text).color(outcome_color(r.outcome_class)));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&r.booster_version_category)
                            .color(state.booster_colors.color_for(&r.booster_version_category)),
                    );
                });
            });
        });
}

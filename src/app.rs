use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SpaceXDashApp {
    pub state: AppState,
}

impl SpaceXDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SpaceXDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: dropdown + payload range ----
        egui::SidePanel::left("selection_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading("SpaceX Launch Records Dashboard");
                    });
                    ui.add_space(8.0);

                    plot::pie_chart(ui, &self.state);
                    ui.separator();
                    plot::scatter_chart(ui, &self.state);
                    ui.separator();

                    egui::CollapsingHeader::new("Launch records")
                        .default_open(false)
                        .show(ui, |ui: &mut Ui| {
                            table::records_table(ui, &self.state);
                        });
                });
        });
    }
}

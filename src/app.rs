use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RuleLensApp {
    pub state: AppState,
}

impl RuleLensApp {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            state: AppState::new(data_dir),
        }
    }
}

impl eframe::App for RuleLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // A load failure blocks the whole dashboard: only the error screen
        // is rendered, with the File menu left as the recovery path.
        if let Some(error) = self.state.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                error_screen(ui, &error);
            });
            return;
        }

        // ---- Left side panel: selector + threshold sliders ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: charts, only for a non-empty filtered set ----
        if !self.state.visible_indices.is_empty() {
            egui::TopBottomPanel::bottom("chart_panel")
                .default_height(300.0)
                .resizable(true)
                .show(ctx, |ui| {
                    plot::charts(ui, &self.state);
                });
        }

        // ---- Central panel: filtered rule table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::rules_table(ui, &self.state);
        });
    }
}

fn error_screen(ui: &mut Ui, error: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(48.0);
        ui.heading("Failed to load rule data");
        ui.add_space(8.0);
        ui.label(RichText::new(error).color(Color32::RED));
        ui.add_space(8.0);
        ui.label("Verify the required data files are present, then use File → Open data folder… or Reload.");
    });
}

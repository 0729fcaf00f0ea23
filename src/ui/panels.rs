use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::model::OccurrenceType;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – occurrence selector and threshold sliders
// ---------------------------------------------------------------------------

/// Render the filter panel. Any change triggers a synchronous refilter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.collection.is_none() {
        ui.label("No data loaded.");
        return;
    }

    // ---- Occurrence-type selector ----
    ui.strong("Occurrence type");
    egui::ComboBox::from_id_salt("occurrence_type")
        .selected_text(state.active.label())
        .show_ui(ui, |ui: &mut Ui| {
            for occ in OccurrenceType::ALL {
                if ui
                    .selectable_label(state.active == occ, occ.label())
                    .clicked()
                {
                    state.select_table(occ);
                }
            }
        });
    ui.separator();

    // ---- Threshold sliders, ranged [0, column max] of the active table ----
    let bounds = state.bounds;
    let mut changed = false;

    ui.strong("Minimum support");
    changed |= ui
        .add(Slider::new(&mut state.criteria.min_support, 0.0..=bounds.max_support).fixed_decimals(4))
        .changed();

    ui.strong("Minimum confidence");
    changed |= ui
        .add(
            Slider::new(&mut state.criteria.min_confidence, 0.0..=bounds.max_confidence)
                .fixed_decimals(4),
        )
        .changed();

    ui.strong("Minimum lift");
    changed |= ui
        .add(Slider::new(&mut state.criteria.min_lift, 0.0..=bounds.max_lift).fixed_decimals(4))
        .changed();

    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = state.active_table() {
            ui.label(format!(
                "{}: {} rules loaded, {} matching",
                state.active,
                table.len(),
                state.visible_indices.len()
            ));
        }

        if state.load_error.is_some() {
            ui.label(RichText::new("load failed").color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open rule data folder")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        log::info!("switching data folder to {}", dir.display());
        state.open_data_dir(&dir);
    }
}

use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

/// Metric columns shown after the pass-through item columns.
const METRIC_HEADERS: [&str; 3] = ["support", "confidence", "lift"];

// ---------------------------------------------------------------------------
// Filtered rule table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered rows. An empty result renders an empty table with a
/// hint label, never an error.
pub fn rules_table(ui: &mut Ui, state: &AppState) {
    let Some(table) = state.active_table() else {
        return;
    };

    if state.visible_indices.is_empty() {
        ui.label(
            egui::RichText::new("No rules match the current thresholds.")
                .weak()
                .italics(),
        );
        ui.add_space(4.0);
    }

    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for _ in &table.item_columns {
        builder = builder.column(Column::auto().at_least(140.0));
    }
    for _ in METRIC_HEADERS {
        builder = builder.column(Column::auto().at_least(80.0));
    }

    builder
        .header(20.0, |mut header| {
            for col in &table.item_columns {
                header.col(|ui| {
                    ui.strong(col.as_str());
                });
            }
            for col in METRIC_HEADERS {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, state.visible_indices.len(), |mut row| {
                let rule = &table.rules[state.visible_indices[row.index()]];
                for item in &rule.items {
                    row.col(|ui| {
                        ui.label(item.as_str());
                    });
                }
                for value in [rule.support, rule.confidence, rule.lift] {
                    row.col(|ui| {
                        ui.monospace(format!("{value:.4}"));
                    });
                }
            });
        });
}

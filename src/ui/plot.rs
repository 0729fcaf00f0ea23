use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, MarkerShape, Plot, Points};

use crate::color::LiftColorMap;
use crate::data::summary::{chart_data, histogram_bins, ChartData};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart panel: lift histogram + support/confidence scatter
// ---------------------------------------------------------------------------

/// Render both charts side by side. Draws nothing when the filtered set is
/// empty; the caller skips the panel entirely in that case.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let Some(table) = state.active_table() else {
        return;
    };
    let Some(data) = chart_data(table, &state.visible_indices) else {
        return;
    };

    ui.columns(2, |columns| {
        lift_histogram(&mut columns[0], &data);
        support_confidence_scatter(&mut columns[1], &data);
    });
}

fn lift_histogram(ui: &mut Ui, data: &ChartData) {
    ui.strong("Lift distribution");

    let bars: Vec<Bar> = histogram_bins(&data.lift_values)
        .into_iter()
        .map(|bin| Bar::new(bin.center, bin.count as f64).width(bin.width * 0.95))
        .collect();

    Plot::new("lift_histogram")
        .x_axis_label("Lift")
        .y_axis_label("Frequency")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("lift"));
        });
}

fn support_confidence_scatter(ui: &mut Ui, data: &ChartData) {
    ui.strong("Support vs confidence (marker size = lift)");

    let colors = LiftColorMap::new(&data.lift_values);

    Plot::new("support_confidence_scatter")
        .x_axis_label("Support")
        .y_axis_label("Confidence")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One Points element per rule so each marker can carry its own
            // lift-driven radius and colour.
            for point in &data.points {
                let t = colors.normalized(point.lift);
                plot_ui.points(
                    Points::new(vec![[point.support, point.confidence]])
                        .shape(MarkerShape::Circle)
                        .radius(2.5 + 6.0 * t)
                        .color(colors.color_for(point.lift)),
                );
            }
        });
}

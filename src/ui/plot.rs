use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::state::AppState;

/// Segments used for a full circle; a wedge gets its proportional share.
const CIRCLE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Outline of a unit-circle wedge spanning `[start, end)` of the whole,
/// starting at 12 o'clock and running clockwise.
pub fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) * CIRCLE_SEGMENTS as f64).ceil() as usize).max(1);
    let angle = |frac: f64| FRAC_PI_2 - frac * TAU;

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = angle(start + (end - start) * i as f64 / steps as f64);
        points.push([a.cos(), a.sin()]);
    }
    points
}

/// Render the success pie chart for the current selection.
pub fn pie_chart(ui: &mut Ui, state: &AppState) {
    let pie = &state.pie;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&pie.title);
    });

    if pie.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this selection.");
        });
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(320.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for slice in &pie.slices {
                let fraction = pie.fraction(slice);
                let end = start + fraction;
                let label = slice.label.to_string();
                let color = state.pie_colors.color_for(&label);

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge_points(start, end)))
                        .name(&label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = FRAC_PI_2 - (start + fraction / 2.0) * TAU;
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        format!("{:.1}%", fraction * 100.0),
                    )
                    .color(Color32::WHITE),
                );

                start = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render the payload vs. outcome scatter plot, one series per booster category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState) {
    let scatter = &state.scatter;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&scatter.title);
    });

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Mission Outcome")
        .include_x(scatter.range.min_kg.min(scatter.range.max_kg))
        .include_x(scatter.range.max_kg.max(scatter.range.min_kg))
        .include_y(-0.25)
        .include_y(1.25)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (category, coords) in scatter.by_category() {
                plot_ui.points(
                    Points::new(PlotPoints::from(coords))
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .filled(true)
                        .radius(4.0),
                );
            }
        });

    if scatter.range.is_inverted() {
        ui.label(egui::RichText::new("Payload range is inverted; nothing to show.").weak());
    } else if scatter.points.is_empty() {
        ui.label(egui::RichText::new("No launches in the selected payload range.").weak());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn wedge_starts_at_centre_and_top() {
        let pts = wedge_points(0.0, 0.25);
        assert!(close(pts[0], [0.0, 0.0]));
        assert!(close(pts[1], [0.0, 1.0]));
        // A quarter turn clockwise from 12 o'clock ends at 3 o'clock.
        assert!(close(*pts.last().unwrap(), [1.0, 0.0]));
    }

    #[test]
    fn rim_points_lie_on_unit_circle() {
        let pts = wedge_points(0.1, 0.7);
        assert!(pts[1..]
            .iter()
            .all(|p| ((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < 1e-9));
    }

    #[test]
    fn tiny_wedge_still_has_a_rim_segment() {
        assert_eq!(wedge_points(0.5, 0.5).len(), 3);
    }
}

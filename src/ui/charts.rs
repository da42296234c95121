use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Polygon};

use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Central panel – the three charts
// ---------------------------------------------------------------------------

/// Render the bar, pie, and line charts for the current filtered view.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records in the dataset  (File → Open…)");
        });
        return;
    }

    let country = state
        .criteria
        .country
        .clone()
        .unwrap_or_else(|| "(no country)".to_string());

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(format!("CO2 Emissions in {country}"));
            bar_chart(ui, state);
            ui.separator();

            ui.heading(format!("Percentage of CO2 Emissions per year in {country}"));
            pie_chart(ui, state);
            ui.separator();

            ui.heading(format!("Evolution of CO2 Emissions in {country}"));
            line_chart(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Bar chart: one bar per (year, emission) pair
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, state: &AppState) {
    let bars: Vec<Bar> = state
        .charts
        .bar
        .iter()
        .map(|&(year, value)| {
            Bar::new(year as f64, value)
                .width(3.0)
                .fill(state.year_colors.color_for(year))
                .name(year.to_string())
        })
        .collect();

    Plot::new("bar_chart")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("CO2 emission (Tons)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Pie chart: one wedge per year, proportional to its emission share
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, state: &AppState) {
    Plot::new("pie_chart")
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes([false, false])
        .show_grid([false, false])
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            // Wedges start at 12 o'clock and run clockwise.
            let mut start = FRAC_PI_2;
            for slice in &state.charts.pie {
                if slice.fraction <= 0.0 {
                    continue;
                }
                let sweep = slice.fraction * TAU;
                let wedge = Polygon::new(wedge_points(start, sweep))
                    .fill_color(state.year_colors.color_for(slice.year))
                    .name(format!(
                        "{}: {:.1}% ({})",
                        slice.year,
                        slice.fraction * 100.0,
                        super::panels::format_tons(slice.value)
                    ));
                plot_ui.polygon(wedge);
                start -= sweep;
            }
        });
}

/// Unit-circle wedge outline: the centre plus an arc from `start` sweeping
/// `sweep` radians clockwise.
fn wedge_points(start: f64, sweep: f64) -> PlotPoints<'static> {
    let steps = ((sweep / TAU) * 64.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start - sweep * (i as f64 / steps as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Line chart: emissions over time, ascending by year
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = PlotPoints::from(state.charts.line.clone());
    let line = Line::new(points).color(Color32::LIGHT_BLUE).width(2.0);

    Plot::new("line_chart")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("CO2 emission (Tons)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

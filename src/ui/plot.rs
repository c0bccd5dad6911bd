use eframe::egui::{Ui, Vec2};
use egui_plot::{GridMark, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::data::classify::SeriesStyle;
use crate::state::{AppState, GraphView};

const TITLE_HEIGHT: f32 = 22.0;
const MIN_CELL: f32 = 80.0;

// ---------------------------------------------------------------------------
// Plot grid (central panel)
// ---------------------------------------------------------------------------

/// Lay the graphs out row by row, `grid_side` plots per row.
pub fn plot_grid(ui: &mut Ui, state: &AppState) {
    if state.graphs.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Nothing to plot");
        });
        return;
    }

    let side = state.grid_side.max(1);
    let rows = state.graphs.len().div_ceil(side);
    let cell = cell_size(ui.available_size(), ui.spacing().item_spacing, side, rows);

    for (row, chunk) in state.graphs.chunks(side).enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            for (col, graph) in chunk.iter().enumerate() {
                ui.vertical(|ui: &mut Ui| {
                    ui.set_width(cell.x);
                    graph_plot(ui, row * side + col, graph, state.logarithmic, cell);
                });
            }
        });
    }
}

fn cell_size(available: Vec2, spacing: Vec2, cols: usize, rows: usize) -> Vec2 {
    let width = (available.x - spacing.x * (cols - 1) as f32) / cols as f32;
    let height = (available.y - spacing.y * (rows - 1) as f32) / rows as f32;
    Vec2::new(width.max(MIN_CELL), height.max(MIN_CELL))
}

fn graph_plot(ui: &mut Ui, index: usize, graph: &GraphView, logarithmic: bool, cell: Vec2) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&graph.title);
    });

    let mut plot = Plot::new(("graph", index))
        .width(cell.x)
        .height((cell.y - TITLE_HEIGHT).max(MIN_CELL / 2.0))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if graph.legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(label) = &graph.x_label {
        plot = plot.x_axis_label(label.as_str());
    }
    if logarithmic {
        plot = plot
            .y_axis_formatter(|mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
                log_tick_label(mark.value)
            })
            .label_formatter(|name: &str, point: &PlotPoint| {
                let prefix = if name.is_empty() {
                    String::new()
                } else {
                    format!("{name}\n")
                };
                format!("{prefix}x = {:.4}\ny = {:.4e}", point.x, 10f64.powf(point.y))
            });
    }

    plot.show(ui, |plot_ui| {
        for series in &graph.series {
            let points: PlotPoints = series.points.iter().copied().collect();
            let name = series.name.clone().unwrap_or_default();
            match series.style {
                SeriesStyle::Line => {
                    plot_ui.line(Line::new(points).name(name).color(series.color).width(1.5));
                }
                SeriesStyle::Markers => {
                    plot_ui.points(
                        Points::new(points)
                            .name(name)
                            .color(series.color)
                            .shape(MarkerShape::Plus)
                            .radius(4.0),
                    );
                }
            }
        }
    });
}

/// Tick label for a `log10` axis position.
fn log_tick_label(exponent: f64) -> String {
    if exponent.fract() == 0.0 {
        format!("1e{}", exponent as i64)
    } else {
        format!("{:.2e}", 10f64.powf(exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_exponents_read_as_powers_of_ten() {
        assert_eq!(log_tick_label(0.0), "1e0");
        assert_eq!(log_tick_label(3.0), "1e3");
        assert_eq!(log_tick_label(-2.0), "1e-2");
    }

    #[test]
    fn fractional_exponents_show_the_value() {
        assert_eq!(log_tick_label(0.5), "3.16e0");
    }

    #[test]
    fn cells_share_the_available_space() {
        let cell = cell_size(Vec2::new(820.0, 620.0), Vec2::new(20.0, 20.0), 2, 2);
        assert_eq!(cell, Vec2::new(400.0, 300.0));
        let tiny = cell_size(Vec2::new(10.0, 10.0), Vec2::ZERO, 3, 3);
        assert_eq!(tiny, Vec2::splat(MIN_CELL));
    }
}

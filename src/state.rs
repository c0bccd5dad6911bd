use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::data::classify::SeriesStyle;
use crate::data::model::{Graph, Model};

// ---------------------------------------------------------------------------
// Render-ready view of the model
// ---------------------------------------------------------------------------

/// One series as it is drawn.
#[derive(Debug, Clone)]
pub struct SeriesView {
    /// Legend entry; only set when the run is named.
    pub name: Option<String>,
    pub color: Color32,
    pub style: SeriesStyle,
    /// Present samples, with `log10(y)` on logarithmic runs.
    pub points: Vec<[f64; 2]>,
}

/// One plot cell.
#[derive(Debug, Clone)]
pub struct GraphView {
    pub title: String,
    pub x_label: Option<String>,
    pub legend: bool,
    pub series: Vec<SeriesView>,
}

/// Everything the UI draws, computed once from the final [`Model`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub graphs: Vec<GraphView>,
    pub logarithmic: bool,
    /// Plots per row and column of the grid.
    pub grid_side: usize,
}

impl AppState {
    pub fn from_model(model: &Model) -> Self {
        let graphs = model
            .graphs
            .iter()
            .map(|graph| graph_view(model, graph))
            .collect();
        Self {
            graphs,
            logarithmic: model.logarithmic,
            grid_side: grid_side(model.graphs.len()),
        }
    }
}

fn graph_view(model: &Model, graph: &Graph) -> GraphView {
    let colors = generate_palette(graph.series.len());
    let series = graph
        .series
        .iter()
        .zip(colors)
        .map(|(series, color)| {
            let points = series.points(&graph.x_values);
            let points = if model.logarithmic {
                // Non-positive samples have no place on a log axis.
                points
                    .filter(|[_, y]| *y > 0.0)
                    .map(|[x, y]| [x, y.log10()])
                    .collect()
            } else {
                points.collect()
            };
            SeriesView {
                name: model.named.then(|| series.name.clone().unwrap_or_default()),
                color,
                style: model.style_of(series),
                points,
            }
        })
        .collect();

    GraphView {
        title: graph.name.clone(),
        x_label: model.named.then(|| graph.x_name.clone()).flatten(),
        legend: model.named,
        series,
    }
}

/// Smallest `k` with `k * k >= count`, at least 1.
pub fn grid_side(count: usize) -> usize {
    let mut side = 1;
    while side * side < count {
        side += 1;
    }
    side
}

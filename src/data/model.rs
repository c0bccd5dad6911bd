use std::fmt;

use crate::config::Thresholds;

use super::classify::{series_style, SamplePool, SeriesStyle};
use super::table::ParsedTable;

// ---------------------------------------------------------------------------
// Series – one y column
// ---------------------------------------------------------------------------

/// One column of y values, parallel to the owning graph's x values.
#[derive(Debug, Clone, Default)]
pub struct Series {
    /// Header label, if the file had one.
    pub name: Option<String>,
    /// Samples; NaN marks a missing cell.
    pub values: Vec<f64>,
    /// Number of non-missing entries in `values`.
    pub valid_count: usize,
}

impl Series {
    /// `(x, y)` pairs where both coordinates are present.
    pub fn points<'a>(&'a self, x_values: &'a [f64]) -> impl Iterator<Item = [f64; 2]> + 'a {
        x_values
            .iter()
            .zip(&self.values)
            .filter(|(x, y)| !x.is_nan() && !y.is_nan())
            .map(|(&x, &y)| [x, y])
    }
}

// ---------------------------------------------------------------------------
// Graph – one input file
// ---------------------------------------------------------------------------

/// The parsed content of one file: a shared x sequence and its series.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Source file name.
    pub name: String,
    pub x_name: Option<String>,
    /// NaN marks a missing cell.
    pub x_values: Vec<f64>,
    /// In column order.
    pub series: Vec<Series>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Model – everything handed to the renderer
// ---------------------------------------------------------------------------

/// All loaded graphs plus the run-wide display flags.
///
/// `named`, `logarithmic` and `max_valid_points` only ever grow as tables are
/// folded in, whatever the file order.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// In input order.
    pub graphs: Vec<Graph>,
    /// Some file had a header row.
    pub named: bool,
    /// The y axis should be logarithmic.
    pub logarithmic: bool,
    /// Largest valid sample count of any single series.
    pub max_valid_points: usize,
    thresholds: Thresholds,
    pool: SamplePool,
}

impl Model {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Default::default()
        }
    }

    /// Add one parsed file and update the run-wide flags.
    ///
    /// The skew test runs on this file's own samples; [`finish`](Self::finish)
    /// repeats it on the complete pool.
    pub fn fold(&mut self, table: ParsedTable) {
        let ParsedTable {
            graph,
            dialect,
            samples,
        } = table;

        self.named |= dialect.has_header;

        if let Some(stats) = samples.stats() {
            log::debug!(
                "{}: {} samples, mean {}, median {}",
                graph.name,
                stats.count,
                stats.mean,
                stats.median
            );
            if stats.is_skewed(&self.thresholds) {
                self.logarithmic = true;
            }
            let densest = graph.series.iter().map(|s| s.valid_count).max();
            self.max_valid_points = self.max_valid_points.max(densest.unwrap_or(0));
        }

        self.pool.merge(samples);
        self.graphs.push(graph);
    }

    /// Final pass once every file is folded in.
    pub fn finish(&mut self) {
        if let Some(stats) = self.pool.stats() {
            log::debug!(
                "pooled: {} samples, mean {}, median {}, densest series {}",
                stats.count,
                stats.mean,
                stats.median,
                self.max_valid_points
            );
            if stats.is_skewed(&self.thresholds) {
                self.logarithmic = true;
            }
        }
    }

    /// Line or markers, judged against the densest series of the whole run.
    pub fn style_of(&self, series: &Series) -> SeriesStyle {
        series_style(series.valid_count, self.max_valid_points, &self.thresholds)
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

// Plain text report of what would be drawn.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for graph in &self.graphs {
            write!(f, "{}: {} rows", graph.name, graph.len())?;
            if let Some(x_name) = &graph.x_name {
                write!(f, ", x = {x_name}")?;
            }
            writeln!(f)?;
            for (i, series) in graph.series.iter().enumerate() {
                let style = match self.style_of(series) {
                    SeriesStyle::Line => "line",
                    SeriesStyle::Markers => "markers",
                };
                match &series.name {
                    Some(name) => write!(f, "  {name}")?,
                    None => write!(f, "  #{}", i + 1)?,
                }
                writeln!(f, ": {} valid, {style}", series.valid_count)?;
            }
        }
        writeln!(
            f,
            "named: {}, logarithmic: {}, densest series: {}",
            self.named, self.logarithmic, self.max_valid_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::read_table;

    fn parse(name: &str, text: &str) -> ParsedTable {
        read_table(name, text.as_bytes()).unwrap()
    }

    fn model_of(files: &[(&str, &str)]) -> Model {
        let mut model = Model::default();
        for (name, text) in files {
            model.fold(parse(name, text));
        }
        model.finish();
        model
    }

    const SKEWED: &str = "t,v\n0,1\n1,1\n2,1\n3,1\n4,100\n";
    const FLAT: &str = "0 1\n1 2\n2 3\n3 4\n4 5\n";

    #[test]
    fn log_scale_is_sticky_across_files() {
        let model = model_of(&[("skewed.csv", SKEWED), ("flat.txt", FLAT)]);
        assert!(model.logarithmic);
        assert_eq!(model.graphs.len(), 2);
        assert_eq!(model.graphs[0].name, "skewed.csv");
        assert_eq!(model.graphs[1].name, "flat.txt");
    }

    #[test]
    fn flags_do_not_depend_on_file_order() {
        let forward = model_of(&[("a", SKEWED), ("b", FLAT)]);
        let backward = model_of(&[("b", FLAT), ("a", SKEWED)]);
        assert_eq!(forward.logarithmic, backward.logarithmic);
        assert_eq!(forward.named, backward.named);
        assert_eq!(forward.max_valid_points, backward.max_valid_points);
    }

    #[test]
    fn flat_data_stays_linear() {
        let model = model_of(&[("flat.txt", FLAT)]);
        assert!(!model.logarithmic);
        assert!(!model.named);
        assert_eq!(model.max_valid_points, 5);
    }

    #[test]
    fn named_is_sticky() {
        let model = model_of(&[("flat.txt", FLAT), ("skewed.csv", SKEWED), ("flat2", FLAT)]);
        assert!(model.named);
    }

    #[test]
    fn flags_never_decrease() {
        let mut model = Model::default();
        model.fold(parse("skewed.csv", SKEWED));
        let after_first = (model.named, model.logarithmic, model.max_valid_points);
        assert_eq!(after_first, (true, true, 5));

        model.fold(parse("flat.txt", FLAT));
        model.finish();
        assert!(model.named);
        assert!(model.logarithmic);
        assert!(model.max_valid_points >= after_first.2);
    }

    #[test]
    fn sparse_series_judged_against_densest_of_run() {
        let dense: String = (0..2000).map(|i| format!("{i},{}\n", i % 7 + 1)).collect();
        let sparse: String = (0..20).map(|i| format!("{i},{}\n", i % 3 + 1)).collect();
        let model = model_of(&[("sparse", sparse.as_str()), ("dense", dense.as_str())]);

        assert_eq!(model.max_valid_points, 2000);
        let sparse_series = &model.graphs[0].series[0];
        let dense_series = &model.graphs[1].series[0];
        assert_eq!(model.style_of(sparse_series), SeriesStyle::Markers);
        assert_eq!(model.style_of(dense_series), SeriesStyle::Line);
    }

    #[test]
    fn empty_file_leaves_flags_untouched() {
        let model = model_of(&[("empty", "")]);
        assert_eq!(model.graphs.len(), 1);
        assert!(!model.named);
        assert!(!model.logarithmic);
        assert_eq!(model.max_valid_points, 0);
    }

    #[test]
    fn text_report() {
        let model = model_of(&[("skewed.csv", SKEWED), ("flat.txt", FLAT)]);
        let report = model.to_string();
        assert_eq!(
            report,
            "skewed.csv: 5 rows, x = t\n  v: 5 valid, markers\n\
             flat.txt: 5 rows\n  #1: 5 valid, markers\n\
             named: true, logarithmic: true, densest series: 5\n"
        );
    }

    #[test]
    fn points_skip_missing_cells() {
        let model = model_of(&[("gaps", "0,1\n1,NA\nx,3\n3,4\n")]);
        let graph = &model.graphs[0];
        let points: Vec<[f64; 2]> = graph.series[0].points(&graph.x_values).collect();
        assert_eq!(points, vec![[0.0, 1.0], [3.0, 4.0]]);
    }
}

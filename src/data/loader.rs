use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::error::LoadError;
use super::model::Model;
use super::table::{read_table, ParsedTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one delimited text table. The graph is named after `path` as given.
pub fn load_file(path: &Path) -> Result<ParsedTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path.to_string_lossy();
    read_table(&name, BufReader::new(file)).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every file in order into `model`, skipping the ones that fail.
///
/// Returns the failures so the caller can report them. [`Model::finish`] is
/// called once all files are folded in.
pub fn load_files<P: AsRef<Path>>(paths: &[P], model: &mut Model) -> Vec<LoadError> {
    let mut failures = Vec::new();

    for path in paths {
        match load_file(path.as_ref()) {
            Ok(table) => model.fold(table),
            Err(e) => {
                log::error!("Skipping file: {e}");
                failures.push(e);
            }
        }
    }
    model.finish();

    log::info!(
        "Loaded {} of {} files (named: {}, logarithmic: {}, densest series: {})",
        model.graphs.len(),
        paths.len(),
        model.named,
        model.logarithmic,
        model.max_valid_points
    );
    failures
}

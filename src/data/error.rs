use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a file did not make it into the model.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("could not open {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through the table.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Unavailable { path, .. } | LoadError::Read { path, .. } => path,
        }
    }
}

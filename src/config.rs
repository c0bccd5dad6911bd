use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Heuristic thresholds
// ---------------------------------------------------------------------------

/// Constants used to classify loaded data for display.
///
/// Loaded from a JSON object where every field is optional:
///
/// ```json
/// { "log_ratio": 10.0, "min_points": 10, "max_points": 1000, "relative_points": 0.02 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Logarithmic y axis when the pooled mean exceeds the median this many times.
    pub log_ratio: f64,
    /// Series with fewer valid samples are always drawn as markers.
    pub min_points: usize,
    /// Series with at least this many valid samples are never drawn as markers.
    pub max_points: usize,
    /// Fraction of the densest series below which a series is drawn as markers.
    pub relative_points: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            log_ratio: 10.0,
            min_points: 10,
            max_points: 1000,
            relative_points: 0.02,
        }
    }
}

impl Thresholds {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing thresholds JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading thresholds file {}", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let t = Thresholds::from_json_str(r#"{ "min_points": 3 }"#).unwrap();
        assert_eq!(t.min_points, 3);
        assert_eq!(t.max_points, 1000);
        assert_eq!(t.log_ratio, 10.0);
        assert_eq!(t.relative_points, 0.02);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Thresholds::from_json_str("{}").unwrap(), Thresholds::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(Thresholds::from_json_str(r#"{ "log_ration": 5 }"#).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thresholds.json");
        std::fs::write(&path, r#"{ "log_ratio": 4.0 }"#).unwrap();
        assert_eq!(Thresholds::load(&path).unwrap().log_ratio, 4.0);
        assert!(Thresholds::load(&dir.path().join("missing.json")).is_err());
    }
}

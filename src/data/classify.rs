use crate::config::Thresholds;

// ---------------------------------------------------------------------------
// SamplePool – every valid sample seen so far
// ---------------------------------------------------------------------------

/// Multiset of valid (non-missing) samples with their running sum.
#[derive(Debug, Clone, Default)]
pub struct SamplePool {
    values: Vec<f64>,
    sum: f64,
}

/// Summary of a [`SamplePool`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolStats {
    pub count: usize,
    pub mean: f64,
    /// Element at index `count / 2` of the sorted samples; for even counts the
    /// two central values are not averaged.
    pub median: f64,
}

impl SamplePool {
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
        self.sum += value;
    }

    pub fn merge(&mut self, other: SamplePool) {
        self.sum += other.sum;
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `None` for an empty pool.
    pub fn stats(&self) -> Option<PoolStats> {
        if self.values.is_empty() {
            return None;
        }
        let count = self.values.len();
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        Some(PoolStats {
            count,
            mean: self.sum / count as f64,
            median: sorted[count / 2],
        })
    }
}

impl FromIterator<f64> for SamplePool {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut pool = SamplePool::default();
        for value in iter {
            pool.push(value);
        }
        pool
    }
}

impl PoolStats {
    /// Heavy right tail: the mean is far above the median.
    pub fn is_skewed(&self, thresholds: &Thresholds) -> bool {
        self.mean > self.median * thresholds.log_ratio
    }
}

// ---------------------------------------------------------------------------
// Per-series rendering style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Connected line.
    Line,
    /// Discrete markers, for series too sparse to read as a line.
    Markers,
}

/// Style for a series with `valid_count` samples when the densest series of
/// the run has `max_valid_points`.
pub fn series_style(
    valid_count: usize,
    max_valid_points: usize,
    thresholds: &Thresholds,
) -> SeriesStyle {
    let valid = valid_count as f64;
    let sparse = valid_count < thresholds.min_points
        || (valid_count < thresholds.max_points
            && valid < max_valid_points as f64 * thresholds.relative_points);
    if sparse {
        SeriesStyle::Markers
    } else {
        SeriesStyle::Line
    }
}

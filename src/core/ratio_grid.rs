use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::GearSet;

/// Axis tick text aligned with the grid: `front[i]` labels row `i`,
/// `rear[j]` labels column `j`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabels {
    pub front: Vec<String>,
    pub rear: Vec<String>,
}

/// Dense front×rear matrix of rounded gear ratios.
///
/// Row order follows chainring input order, column order follows sprocket
/// input order. The grid is rebuilt wholesale from its inputs; there is no
/// caching and no incremental update between builds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RatioGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
    labels: AxisLabels,
}

impl RatioGrid {
    /// Builds the full ratio matrix for the two gear sets.
    ///
    /// Cell `(i, j)` is `front[i] / rear[j]` rounded to two decimals with
    /// ties to even, the same rounding `format!("{:.2}")` applies, so a
    /// stored value and its rendered text cannot disagree.
    ///
    /// A tooth count of zero is invalid input: zero entries are filtered
    /// from both sets before the matrix is computed, so a zero sprocket
    /// can never divide. Filtering may leave the grid degenerate (zero
    /// rows or zero columns), which renders as an empty chart rather than
    /// failing.
    #[must_use]
    pub fn build(front: &GearSet, rear: &GearSet) -> Self {
        let front_teeth = positive_teeth(front, "front");
        let rear_teeth = positive_teeth(rear, "rear");

        let rows = front_teeth.len();
        let cols = rear_teeth.len();
        let mut values = Vec::with_capacity(rows * cols);
        for &chainring in &front_teeth {
            for &sprocket in &rear_teeth {
                values.push(round_ratio(f64::from(chainring) / f64::from(sprocket)));
            }
        }

        Self {
            rows,
            cols,
            values,
            labels: AxisLabels {
                front: front_teeth.iter().map(u32::to_string).collect(),
                rear: rear_teeth.iter().map(u32::to_string).collect(),
            },
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.rows {
            return None;
        }
        self.values.get(row * self.cols..(row + 1) * self.cols)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    /// Smallest and largest ratio in the grid, or `None` when degenerate.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let first = self.values.first().copied()?;
        let mut min = first;
        let mut max = first;
        for &value in &self.values[1..] {
            min = min.min(value);
            max = max.max(value);
        }
        Some((min, max))
    }
}

fn positive_teeth(set: &GearSet, side: &'static str) -> Vec<u32> {
    let mut teeth = Vec::with_capacity(set.len());
    for tooth_count in set.iter() {
        if tooth_count == 0 {
            warn!(side, "discarding zero tooth count");
        } else {
            teeth.push(tooth_count);
        }
    }
    teeth
}

fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round_ratio;

    #[test]
    fn rounding_keeps_two_decimals_with_ties_to_even() {
        assert_eq!(round_ratio(36.0 / 11.0), 3.27);
        assert_eq!(round_ratio(0.125), 0.12);
        assert_eq!(round_ratio(0.375), 0.38);
    }
}

use crate::core::{GridCell, Viewport};
use crate::error::{GearMapError, GearMapResult};

use super::HeatmapStyle;

/// Pixel geometry of the plot area and its cell raster.
///
/// Ticks sit at integer indices 0..n-1; index `k` maps to the center of
/// cell column/row `k`, so labels and cells stay aligned for any grid
/// shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapLayout {
    plot_left: f64,
    plot_top: f64,
    plot_right: f64,
    plot_bottom: f64,
    rows: usize,
    cols: usize,
}

impl HeatmapLayout {
    pub fn build(
        viewport: Viewport,
        style: &HeatmapStyle,
        rows: usize,
        cols: usize,
    ) -> GearMapResult<Self> {
        if !viewport.is_valid() {
            return Err(GearMapError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let plot_left = style.margin_left_px;
        let plot_top = style.margin_top_px;
        let plot_right = f64::from(viewport.width) - style.margin_right_px;
        let plot_bottom = f64::from(viewport.height) - style.margin_bottom_px;
        if plot_right <= plot_left || plot_bottom <= plot_top {
            return Err(GearMapError::InvalidData(
                "viewport leaves no plot area inside the configured margins".to_owned(),
            ));
        }

        Ok(Self {
            plot_left,
            plot_top,
            plot_right,
            plot_bottom,
            rows,
            cols,
        })
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.plot_left
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.plot_top
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.plot_right
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.plot_bottom
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_right - self.plot_left
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_bottom - self.plot_top
    }

    #[must_use]
    pub fn cell_width(self) -> f64 {
        if self.cols == 0 {
            return 0.0;
        }
        self.plot_width() / self.cols as f64
    }

    #[must_use]
    pub fn cell_height(self) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.plot_height() / self.rows as f64
    }

    /// Top-left corner of cell `(row, col)`.
    #[must_use]
    pub fn cell_origin(self, cell: GridCell) -> (f64, f64) {
        (
            self.plot_left + cell.col as f64 * self.cell_width(),
            self.plot_top + cell.row as f64 * self.cell_height(),
        )
    }

    #[must_use]
    pub fn col_center_x(self, col: usize) -> f64 {
        self.plot_left + (col as f64 + 0.5) * self.cell_width()
    }

    #[must_use]
    pub fn row_center_y(self, row: usize) -> f64 {
        self.plot_top + (row as f64 + 0.5) * self.cell_height()
    }

    /// Resolves a pixel position to the cell under it, if any.
    #[must_use]
    pub fn hit_test(self, x: f64, y: f64) -> Option<GridCell> {
        if self.rows == 0 || self.cols == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < self.plot_left || x >= self.plot_right || y < self.plot_top || y >= self.plot_bottom
        {
            return None;
        }

        let col = ((x - self.plot_left) / self.cell_width()) as usize;
        let row = ((y - self.plot_top) / self.cell_height()) as usize;
        // Float division can land exactly on the far edge.
        Some(GridCell::new(row.min(self.rows - 1), col.min(self.cols - 1)))
    }
}

use crate::core::RatioGrid;
use crate::render::Color;

use super::HeatmapStyle;

/// Maps a ratio onto the low..high fill ramp over the grid's value span.
#[derive(Debug, Clone, Copy)]
pub(super) struct ColorRamp {
    low: Color,
    high: Color,
    min: f64,
    span: f64,
}

impl ColorRamp {
    pub(super) fn for_grid(grid: &RatioGrid, style: &HeatmapStyle) -> Self {
        let (min, max) = grid.value_range().unwrap_or((0.0, 0.0));
        Self {
            low: style.cell_fill_low,
            high: style.cell_fill_high,
            min,
            span: max - min,
        }
    }

    /// A single-valued grid sits entirely at the low end of the ramp.
    pub(super) fn fill_for(&self, value: f64) -> Color {
        if self.span <= 0.0 {
            return self.low;
        }
        self.low.lerp(self.high, (value - self.min) / self.span)
    }
}

/// Picks the legible cell text color for a fill.
///
/// Uses the Rec. 709 luma weights; fills darker than mid-gray get the
/// light text color.
pub(super) fn contrast_text_color(fill: Color, style: &HeatmapStyle) -> Color {
    let luminance = 0.2126 * fill.red + 0.7152 * fill.green + 0.0722 * fill.blue;
    if luminance < 0.5 {
        style.cell_text_on_dark
    } else {
        style.cell_text_on_light
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorRamp, contrast_text_color};
    use crate::api::HeatmapStyle;
    use crate::core::{GearSet, RatioGrid};
    use crate::render::Color;

    #[test]
    fn ramp_spans_grid_extremes() {
        let grid = RatioGrid::build(
            &GearSet::from_teeth([36, 50]),
            &GearSet::from_teeth([11, 28]),
        );
        let style = HeatmapStyle::default();
        let ramp = ColorRamp::for_grid(&grid, &style);

        let (min, max) = grid.value_range().expect("non-degenerate grid");
        assert_eq!(ramp.fill_for(min), style.cell_fill_low);
        assert_eq!(ramp.fill_for(max), style.cell_fill_high);
    }

    #[test]
    fn single_valued_grid_uses_low_fill() {
        let grid = RatioGrid::build(&GearSet::from_teeth([36]), &GearSet::from_teeth([18]));
        let style = HeatmapStyle::default();
        let ramp = ColorRamp::for_grid(&grid, &style);

        assert_eq!(ramp.fill_for(2.0), style.cell_fill_low);
    }

    #[test]
    fn dark_fills_get_light_text() {
        let style = HeatmapStyle::default();
        assert_eq!(
            contrast_text_color(Color::rgb(0.1, 0.1, 0.1), &style),
            style.cell_text_on_dark
        );
        assert_eq!(
            contrast_text_color(Color::rgb(0.9, 0.9, 0.2), &style),
            style.cell_text_on_light
        );
    }
}

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Visual tuning for the heatmap scene.
///
/// Defaults: a viridis-like fill ramp, black tick text, and a 3px black
/// border around the plot area. There is deliberately no color-scale
/// legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapStyle {
    /// Fill for the smallest ratio in the grid.
    pub cell_fill_low: Color,
    /// Fill for the largest ratio in the grid.
    pub cell_fill_high: Color,
    /// Cell text used on dark fills.
    pub cell_text_on_dark: Color,
    /// Cell text used on light fills.
    pub cell_text_on_light: Color,
    pub cell_font_size_px: f64,
    /// Gap between neighboring cells, split evenly on each side.
    pub cell_gap_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    pub tick_label_padding_px: f64,
    pub tick_mark_color: Color,
    pub tick_mark_length_px: f64,
    pub tick_mark_width: f64,
    pub border_color: Color,
    pub border_width_px: f64,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,
    /// Title above the row axis; empty hides it.
    pub front_axis_title: String,
    /// Title below the column axis; empty hides it.
    pub rear_axis_title: String,
    pub margin_left_px: f64,
    pub margin_right_px: f64,
    pub margin_top_px: f64,
    pub margin_bottom_px: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            cell_fill_low: Color::rgb(0.267, 0.005, 0.329),
            cell_fill_high: Color::rgb(0.993, 0.906, 0.144),
            cell_text_on_dark: Color::rgb(1.0, 1.0, 1.0),
            cell_text_on_light: Color::rgb(0.0, 0.0, 0.0),
            cell_font_size_px: 12.0,
            cell_gap_px: 1.0,
            tick_label_color: Color::rgb(0.0, 0.0, 0.0),
            tick_label_font_size_px: 12.0,
            tick_label_padding_px: 6.0,
            tick_mark_color: Color::rgb(0.0, 0.0, 0.0),
            tick_mark_length_px: 4.0,
            tick_mark_width: 1.0,
            border_color: Color::rgb(0.0, 0.0, 0.0),
            border_width_px: 3.0,
            axis_title_color: Color::rgb(0.0, 0.0, 0.0),
            axis_title_font_size_px: 13.0,
            front_axis_title: "Front chainring".to_owned(),
            rear_axis_title: "Rear sprocket".to_owned(),
            margin_left_px: 72.0,
            margin_right_px: 24.0,
            margin_top_px: 32.0,
            margin_bottom_px: 56.0,
        }
    }
}

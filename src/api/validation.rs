use crate::error::{GearMapError, GearMapResult};

use super::HeatmapStyle;

pub(super) fn validate_heatmap_style(style: &HeatmapStyle) -> GearMapResult<()> {
    style.cell_fill_low.validate()?;
    style.cell_fill_high.validate()?;
    style.cell_text_on_dark.validate()?;
    style.cell_text_on_light.validate()?;
    style.tick_label_color.validate()?;
    style.tick_mark_color.validate()?;
    style.border_color.validate()?;
    style.axis_title_color.validate()?;

    for (name, value) in [
        ("cell_font_size_px", style.cell_font_size_px),
        ("tick_label_font_size_px", style.tick_label_font_size_px),
        ("tick_mark_width", style.tick_mark_width),
        ("border_width_px", style.border_width_px),
        ("axis_title_font_size_px", style.axis_title_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(GearMapError::InvalidData(format!(
                "heatmap style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("cell_gap_px", style.cell_gap_px),
        ("tick_label_padding_px", style.tick_label_padding_px),
        ("tick_mark_length_px", style.tick_mark_length_px),
        ("margin_left_px", style.margin_left_px),
        ("margin_right_px", style.margin_right_px),
        ("margin_top_px", style.margin_top_px),
        ("margin_bottom_px", style.margin_bottom_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(GearMapError::InvalidData(format!(
                "heatmap style `{name}` must be finite and >= 0"
            )));
        }
    }

    Ok(())
}

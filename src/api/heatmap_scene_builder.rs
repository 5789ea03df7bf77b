use crate::core::{GridCell, RatioGrid};
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::color_ramp::{ColorRamp, contrast_text_color};
use super::{HeatmapLayout, HeatmapStyle};

/// Inputs shared by every scene pass of one draw.
pub(super) struct HeatmapSceneContext<'a> {
    pub grid: &'a RatioGrid,
    pub layout: HeatmapLayout,
    pub style: &'a HeatmapStyle,
}

/// One filled rect plus one centered 2-decimal label per cell.
///
/// Fill encodes the ratio on the low..high ramp; the legend stays hidden
/// so the printed values are the only scale.
pub(super) fn append_cell_scene(frame: &mut RenderFrame, ctx: &HeatmapSceneContext<'_>) {
    let ramp = ColorRamp::for_grid(ctx.grid, ctx.style);
    let gap = ctx.style.cell_gap_px;
    let cell_width = (ctx.layout.cell_width() - gap).max(0.0);
    let cell_height = (ctx.layout.cell_height() - gap).max(0.0);

    for row in 0..ctx.grid.rows() {
        for col in 0..ctx.grid.cols() {
            let Some(ratio) = ctx.grid.value(row, col) else {
                continue;
            };
            let (x, y) = ctx.layout.cell_origin(GridCell::new(row, col));
            let fill = ramp.fill_for(ratio);

            frame.rects.push(RectPrimitive::filled(
                x + gap * 0.5,
                y + gap * 0.5,
                cell_width,
                cell_height,
                fill,
            ));
            frame.texts.push(TextPrimitive::new(
                format!("{ratio:.2}"),
                ctx.layout.col_center_x(col),
                ctx.layout.row_center_y(row),
                ctx.style.cell_font_size_px,
                contrast_text_color(fill, ctx.style),
                TextHAlign::Center,
            ));
        }
    }
}

/// Tick marks and tooth-count tick text for both axes, plus axis titles.
///
/// One tick per row/column, placed at the cell center of its index; the
/// tick text is the tooth count itself, not the numeric position.
pub(super) fn append_axis_scene(frame: &mut RenderFrame, ctx: &HeatmapSceneContext<'_>) {
    let style = ctx.style;
    let layout = ctx.layout;
    let labels = ctx.grid.labels();
    let draw_marks = style.tick_mark_length_px > 0.0;

    for (row, label) in labels.front.iter().enumerate() {
        let y = layout.row_center_y(row);
        if draw_marks {
            frame.lines.push(LinePrimitive::new(
                layout.plot_left() - style.tick_mark_length_px,
                y,
                layout.plot_left(),
                y,
                style.tick_mark_width,
                style.tick_mark_color,
            ));
        }
        frame.texts.push(TextPrimitive::new(
            label.clone(),
            layout.plot_left() - style.tick_mark_length_px - style.tick_label_padding_px,
            y,
            style.tick_label_font_size_px,
            style.tick_label_color,
            TextHAlign::Right,
        ));
    }

    for (col, label) in labels.rear.iter().enumerate() {
        let x = layout.col_center_x(col);
        if draw_marks {
            frame.lines.push(LinePrimitive::new(
                x,
                layout.plot_bottom(),
                x,
                layout.plot_bottom() + style.tick_mark_length_px,
                style.tick_mark_width,
                style.tick_mark_color,
            ));
        }
        frame.texts.push(TextPrimitive::new(
            label.clone(),
            x,
            layout.plot_bottom()
                + style.tick_mark_length_px
                + style.tick_label_padding_px
                + style.tick_label_font_size_px * 0.5,
            style.tick_label_font_size_px,
            style.tick_label_color,
            TextHAlign::Center,
        ));
    }

    if !style.front_axis_title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            style.front_axis_title.clone(),
            layout.plot_left(),
            layout.plot_top() * 0.5,
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Left,
        ));
    }
    if !style.rear_axis_title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            style.rear_axis_title.clone(),
            (layout.plot_left() + layout.plot_right()) * 0.5,
            layout.plot_bottom() + style.margin_bottom_px * 0.75,
            style.axis_title_font_size_px,
            style.axis_title_color,
            TextHAlign::Center,
        ));
    }
}

/// Border around the full plot area, drawn even for a degenerate grid.
pub(super) fn append_plot_border(frame: &mut RenderFrame, ctx: &HeatmapSceneContext<'_>) {
    frame.rects.push(RectPrimitive::stroked(
        ctx.layout.plot_left(),
        ctx.layout.plot_top(),
        ctx.layout.plot_width(),
        ctx.layout.plot_height(),
        ctx.style.border_color,
        ctx.style.border_width_px,
    ));
}

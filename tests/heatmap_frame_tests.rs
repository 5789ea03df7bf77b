use approx::assert_relative_eq;
use gearmap_rs::api::{HeatmapEngine, HeatmapEngineConfig, HeatmapLayout, HeatmapStyle};
use gearmap_rs::core::Viewport;
use gearmap_rs::render::NullRenderer;

fn engine_with(front: &str, rear: &str) -> HeatmapEngine<NullRenderer> {
    let config = HeatmapEngineConfig::new(Viewport::new(900, 520))
        .with_front_input(front)
        .with_rear_input(rear);
    HeatmapEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn frame_carries_cells_ticks_titles_and_border() {
    let engine = engine_with("36, 50", "11, 13, 15, 17, 19, 21, 23, 25, 28");
    let frame = engine.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");

    // 2x9 cells + plot border.
    assert_eq!(frame.rects.len(), 2 * 9 + 1);
    // One tick mark per row and column.
    assert_eq!(frame.lines.len(), 2 + 9);
    // Cell values + tick text + the two axis titles.
    assert_eq!(frame.texts.len(), 2 * 9 + 2 + 9 + 2);
}

#[test]
fn cell_text_is_the_two_decimal_ratio() {
    let engine = engine_with("36, 50", "11, 13");
    let frame = engine.build_render_frame().expect("build frame");

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    for expected in ["3.27", "2.77", "4.55", "3.85"] {
        assert!(texts.contains(&expected), "missing cell text {expected}");
    }
}

#[test]
fn tick_text_is_the_tooth_count_not_the_index() {
    let engine = engine_with("36, 50", "11, 13");
    let frame = engine.build_render_frame().expect("build frame");

    let texts: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    for expected in ["36", "50", "11", "13"] {
        assert!(texts.contains(&expected), "missing tick text {expected}");
    }
    assert!(!texts.contains(&"0"), "index must not be used as tick text");
    assert!(!texts.contains(&"1"), "index must not be used as tick text");
}

#[test]
fn ticks_sit_at_cell_centers_in_input_order() {
    let engine = engine_with("36, 50", "11, 13");
    let frame = engine.build_render_frame().expect("build frame");
    let layout = HeatmapLayout::build(Viewport::new(900, 520), &HeatmapStyle::default(), 2, 2)
        .expect("layout");

    let tick_11 = frame
        .texts
        .iter()
        .find(|t| t.text == "11")
        .expect("rear tick 11");
    let tick_13 = frame
        .texts
        .iter()
        .find(|t| t.text == "13")
        .expect("rear tick 13");
    assert_relative_eq!(tick_11.x, layout.col_center_x(0));
    assert_relative_eq!(tick_13.x, layout.col_center_x(1));
    assert!(
        tick_11.x < tick_13.x,
        "column order must follow input order"
    );

    let tick_36 = frame
        .texts
        .iter()
        .find(|t| t.text == "36")
        .expect("front tick 36");
    let tick_50 = frame
        .texts
        .iter()
        .find(|t| t.text == "50")
        .expect("front tick 50");
    assert!(tick_36.y < tick_50.y, "row order must follow input order");
}

#[test]
fn degenerate_grid_still_draws_the_border_without_cells() {
    let engine = engine_with("", "11, 13, 15");
    let frame = engine.build_render_frame().expect("build frame");
    frame.validate().expect("valid frame");

    // Border only; the surviving rear axis keeps its ticks.
    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.lines.len(), 3);
    assert!(frame.rects[0].fill.is_none());
    assert!(frame.rects[0].stroke.is_some());
}

#[test]
fn frame_has_no_color_scale_legend() {
    let engine = engine_with("36, 50", "11, 13");
    let frame = engine.build_render_frame().expect("build frame");

    // Every filled rect is a cell; nothing is drawn outside the plot area
    // except tick marks and text.
    let layout_right = frame.rects.iter().filter_map(|r| {
        r.fill.map(|_| r.x + r.width)
    });
    let border = frame
        .rects
        .iter()
        .find(|r| r.stroke.is_some())
        .expect("plot border");
    for right_edge in layout_right {
        assert!(right_edge <= border.x + border.width + 1e-9);
    }
}

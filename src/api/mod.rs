mod color_ramp;
mod engine;
mod engine_config;
mod heatmap_layout;
mod heatmap_scene_builder;
mod render_style;
mod validation;

pub use engine::{GearField, HeatmapEngine, HeatmapViewState};
pub use engine_config::HeatmapEngineConfig;
pub use heatmap_layout::HeatmapLayout;
pub use render_style::HeatmapStyle;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RatioGrid, Viewport, parse_tooth_counts};
use crate::error::{GearMapError, GearMapResult};
use crate::interaction::{HoveredCell, InteractionState};
use crate::render::{RenderFrame, Renderer};

use super::heatmap_scene_builder::{
    HeatmapSceneContext, append_axis_scene, append_cell_scene, append_plot_border,
};
use super::validation::validate_heatmap_style;
use super::{HeatmapEngineConfig, HeatmapLayout, HeatmapStyle};

/// Identifies which of the two input fields changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GearField {
    Front,
    Rear,
}

/// Immutable snapshot of everything the scene depends on.
///
/// Render code receives this instead of reaching into engine internals,
/// so a draw pass can never observe a half-updated recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapViewState {
    pub front_input: String,
    pub rear_input: String,
    pub grid: RatioGrid,
}

/// Main orchestration facade consumed by host applications.
///
/// `HeatmapEngine` owns the two raw input strings, the derived ratio
/// grid, hover state, and the renderer. Each input change re-parses both
/// fields and rebuilds the grid synchronously before the call returns;
/// there is no queueing and no partial update.
pub struct HeatmapEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    style: HeatmapStyle,
    front_input: String,
    rear_input: String,
    grid: RatioGrid,
    interaction: InteractionState,
}

impl<R: Renderer> HeatmapEngine<R> {
    pub fn new(renderer: R, config: HeatmapEngineConfig) -> GearMapResult<Self> {
        if !config.viewport.is_valid() {
            return Err(GearMapError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }
        validate_heatmap_style(&config.style)?;

        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            style: config.style,
            front_input: config.front_input,
            rear_input: config.rear_input,
            grid: RatioGrid::default(),
            interaction: InteractionState::default(),
        };
        engine.recompute();
        Ok(engine)
    }

    /// Change handler for either input field.
    ///
    /// Malformed text is not an error: it parses to fewer (possibly zero)
    /// tooth counts and the chart degrades to a smaller or empty grid.
    pub fn apply_input_change(&mut self, field: GearField, text: impl Into<String>) {
        match field {
            GearField::Front => self.front_input = text.into(),
            GearField::Rear => self.rear_input = text.into(),
        }
        self.recompute();
    }

    pub fn set_front_input(&mut self, text: impl Into<String>) {
        self.apply_input_change(GearField::Front, text);
    }

    pub fn set_rear_input(&mut self, text: impl Into<String>) {
        self.apply_input_change(GearField::Rear, text);
    }

    #[must_use]
    pub fn front_input(&self) -> &str {
        &self.front_input
    }

    #[must_use]
    pub fn rear_input(&self) -> &str {
        &self.rear_input
    }

    #[must_use]
    pub fn grid(&self) -> &RatioGrid {
        &self.grid
    }

    #[must_use]
    pub fn view_state(&self) -> HeatmapViewState {
        HeatmapViewState {
            front_input: self.front_input.clone(),
            rear_input: self.rear_input.clone(),
            grid: self.grid.clone(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) -> GearMapResult<()> {
        if !viewport.is_valid() {
            return Err(GearMapError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.refresh_hover();
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &HeatmapStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: HeatmapStyle) -> GearMapResult<()> {
        validate_heatmap_style(&style)?;
        self.style = style;
        self.refresh_hover();
        Ok(())
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
        let hovered = self.resolve_hover(x, y);
        self.interaction.set_hovered(hovered);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn hovered_cell(&self) -> Option<HoveredCell> {
        self.interaction.hovered()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Builds the backend-agnostic scene for the current view state.
    pub fn build_render_frame(&self) -> GearMapResult<RenderFrame> {
        let view = self.view_state();
        build_heatmap_frame(&view, self.viewport, &self.style)
    }

    pub fn render(&mut self) -> GearMapResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn recompute(&mut self) {
        let front = parse_tooth_counts(&self.front_input);
        let rear = parse_tooth_counts(&self.rear_input);
        self.grid = RatioGrid::build(&front, &rear);
        debug!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "rebuilt ratio grid"
        );
        self.refresh_hover();
    }

    /// Re-resolves hover after anything that can move cells under the
    /// pointer (recompute, resize, style change).
    fn refresh_hover(&mut self) {
        if !self.interaction.pointer_inside() {
            return;
        }
        let (x, y) = self.interaction.cursor();
        let hovered = self.resolve_hover(x, y);
        self.interaction.set_hovered(hovered);
    }

    fn resolve_hover(&self, x: f64, y: f64) -> Option<HoveredCell> {
        let layout =
            HeatmapLayout::build(self.viewport, &self.style, self.grid.rows(), self.grid.cols())
                .ok()?;
        let cell = layout.hit_test(x, y)?;
        let ratio = self.grid.value(cell.row, cell.col)?;
        Some(HoveredCell { cell, ratio })
    }
}

/// Pure scene assembly from an immutable view state.
pub(super) fn build_heatmap_frame(
    view: &HeatmapViewState,
    viewport: Viewport,
    style: &HeatmapStyle,
) -> GearMapResult<RenderFrame> {
    let layout = HeatmapLayout::build(viewport, style, view.grid.rows(), view.grid.cols())?;
    let ctx = HeatmapSceneContext {
        grid: &view.grid,
        layout,
        style,
    };

    let mut frame = RenderFrame::new(viewport);
    append_cell_scene(&mut frame, &ctx);
    append_axis_scene(&mut frame, &ctx);
    append_plot_border(&mut frame, &ctx);
    Ok(frame)
}

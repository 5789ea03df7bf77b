use serde::{Deserialize, Serialize};

use crate::core::GridCell;

/// Hover details exposed to host applications.
///
/// `ratio` is the rounded value of the hovered cell, ready for a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoveredCell {
    pub cell: GridCell,
    pub ratio: f64,
}

/// Pointer state over the heatmap.
///
/// Purely derived presentation state; it never feeds back into grid
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    cursor_x: f64,
    cursor_y: f64,
    pointer_inside: bool,
    hovered: Option<HoveredCell>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
            pointer_inside: false,
            hovered: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn pointer_inside(self) -> bool {
        self.pointer_inside
    }

    #[must_use]
    pub fn hovered(self) -> Option<HoveredCell> {
        self.hovered
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.pointer_inside = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.hovered = None;
    }

    pub fn set_hovered(&mut self, hovered: Option<HoveredCell>) {
        self.hovered = hovered;
    }
}

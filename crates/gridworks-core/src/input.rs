//! The cursor input slice.
//!
//! The host's pointer-event handlers translate device pixels to grid
//! coordinates and write them here through
//! [`crate::engine::Engine::set_cursor`] between ticks. Handlers never touch
//! the grid directly; this slice is the only externally writable state. The
//! tick reads it snapshot-like, at most once per entity.

use crate::grid::GridPos;

/// Current pointer position in grid coordinate space, and whether the
/// primary button is held.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorState {
    /// Pointer x in grid units (fractional; floor gives the cell column).
    pub x: f64,
    /// Pointer y in grid units.
    pub y: f64,
    /// Whether the primary button is held.
    pub pressed: bool,
}

impl CursorState {
    /// The grid cell the pointer floors into. May be out of bounds; resolve
    /// it through the grid.
    pub fn cell(&self) -> GridPos {
        GridPos::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl Default for CursorState {
    /// Pointer parked outside the grid, button up.
    fn default() -> Self {
        Self {
            x: -1.0,
            y: -1.0,
            pressed: false,
        }
    }
}

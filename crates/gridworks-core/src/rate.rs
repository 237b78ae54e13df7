//! The rate propagation rule: one rule per entity kind, recomputed from
//! scratch every tick.
//!
//! Each rule reads at most the cell immediately to the left, `(x-1, y)`.
//! Combined with the raster traversal in [`crate::sequence`], that neighbor's
//! rate was recomputed earlier in the *same* tick, so a
//! Generator -> Motor -> Producer row cascades within one tick with a
//! multiplicative efficiency loss per hop (0.5, then 0.8 -- 0.4 overall).
//!
//! The rules are total over the closed [`EntityKind`] set; there is no
//! corrupted-kind case to diagnose because the type system does not admit one.

use crate::entity::{EntityKind, MOTOR_EFFICIENCY, PRODUCER_EFFICIENCY};
use crate::grid::{Grid, GridPos};
use crate::input::CursorState;

/// Compute this tick's rate for the cell at `pos`.
///
/// Pure with respect to the grid: the caller writes the result back. Cells
/// that do not resolve, and empty cells, rate 0.
pub fn propagate(grid: &Grid, pos: GridPos, cursor: &CursorState) -> f64 {
    let Some(cell) = grid.resolve(pos) else {
        return 0.0;
    };

    match cell.kind {
        EntityKind::None => 0.0,

        // Driven directly by the pointer: full rate while the cursor floors
        // into this cell with the button held.
        EntityKind::Generator => {
            if cursor.pressed && cursor.cell() == pos {
                1.0
            } else {
                0.0
            }
        }

        // Driven by a generator directly to the left.
        EntityKind::Motor => match grid.resolve(pos.left()) {
            Some(left) if left.kind == EntityKind::Generator => left.rate * MOTOR_EFFICIENCY,
            _ => 0.0,
        },

        // Driven by a motor directly to the left.
        EntityKind::Producer => match grid.resolve(pos.left()) {
            Some(left) if left.kind == EntityKind::Motor => left.rate * PRODUCER_EFFICIENCY,
            _ => 0.0,
        },
    }
}

//! Read-only query API for the render collaborator.
//!
//! Snapshot types are owned copies -- no references into engine storage. The
//! renderer consumes dimensions, the occupied-cell sequence, the ledger
//! total, and the cursor state, and feeds nothing back.

use crate::engine::Engine;
use crate::entity::EntityKind;
use crate::grid::GridPos;
use crate::input::CursorState;
use crate::sequence;

/// An owned view of one occupied cell after a tick.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellSnapshot {
    pub pos: GridPos,
    pub kind: EntityKind,
    /// Fractional cycle position, rendered externally as a rotating indicator.
    pub cycle_progress: f64,
    /// Instantaneous work rate in `[0,1]`.
    pub rate: f64,
}

impl Engine {
    /// Grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    /// Snapshots of all occupied cells, in raster order -- the same order
    /// the tick visits them.
    pub fn cells(&self) -> impl Iterator<Item = CellSnapshot> + '_ {
        sequence::occupied(&self.grid).filter_map(|pos| {
            self.grid.resolve(pos).map(|cell| CellSnapshot {
                pos,
                kind: cell.kind,
                cycle_progress: cell.cycle_progress,
                rate: cell.rate,
            })
        })
    }

    /// Snapshot of a single cell, or `None` out of bounds. Empty cells are
    /// included here (kind `None`); only the sequence filters them.
    pub fn cell(&self, pos: GridPos) -> Option<CellSnapshot> {
        self.grid.resolve(pos).map(|cell| CellSnapshot {
            pos,
            kind: cell.kind,
            cycle_progress: cell.cycle_progress,
            rate: cell.rate,
        })
    }

    /// The accumulated resource total.
    pub fn ledger_total(&self) -> f64 {
        self.ledger.total()
    }

    /// The cursor input slice, for hosts that render the pointer.
    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Completed tick count.
    pub fn tick(&self) -> u64 {
        self.sim_state.tick
    }
}

//! Entity kinds and per-cell state.

// ---------------------------------------------------------------------------
// Efficiency constants
// ---------------------------------------------------------------------------

/// Fraction of a generator's rate a motor retains.
pub const MOTOR_EFFICIENCY: f64 = 0.5;

/// Fraction of a motor's rate a producer retains.
pub const PRODUCER_EFFICIENCY: f64 = 0.8;

// ---------------------------------------------------------------------------
// Entity kind
// ---------------------------------------------------------------------------

/// What occupies a grid cell. Dispatches via enum match (no trait objects).
///
/// `None` is the in-bounds empty state; it is distinct from the out-of-bounds
/// absence signalled by [`crate::grid::Grid::resolve`] returning `Option::None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EntityKind {
    /// Empty cell. Skipped by the occupied-cell sequence.
    #[default]
    None,
    /// Runs at full rate while the cursor is held over its cell.
    Generator,
    /// Takes half the rate of a generator directly to its left.
    Motor,
    /// Takes 80% of the rate of a motor directly to its left.
    Producer,
}

impl EntityKind {
    /// Whether a cell of this kind participates in the tick.
    pub fn is_occupied(self) -> bool {
        self != EntityKind::None
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Mutable state of one grid cell. One exists for every cell, empty or not,
/// for the lifetime of the grid; only the fields mutate, in place, each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    /// What this cell holds. Assigned at setup, constant afterwards.
    pub kind: EntityKind,

    /// Instantaneous work rate in `[0,1]`. Recomputed from scratch every
    /// tick; the previous value survives only long enough for a right
    /// neighbor to read it -- and raster order ensures even that read sees
    /// the fresh value.
    pub rate: f64,

    /// Fractional position within a repeating work cycle, conceptually in
    /// `[0,1)`. May transiently reach 1 or above after a large frame delta;
    /// the next tick's wrap step renormalizes it.
    pub cycle_progress: f64,
}

impl Entity {
    /// A fresh entity of the given kind, at rest.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            rate: 0.0,
            cycle_progress: 0.0,
        }
    }
}

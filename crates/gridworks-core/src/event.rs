//! Simulation events with buffered delivery.
//!
//! Events are recorded while a tick runs and handed to the host afterwards
//! via [`crate::engine::Engine::drain_events`]. They are purely
//! informational -- UI, audio, analytics; dropping them never affects
//! simulation state.

use crate::grid::GridPos;

/// A simulation event. All events carry the tick at which they occurred.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Event {
    /// An entity's cycle progress wrapped past 1: it finished at least one
    /// full work cycle since the previous tick.
    CycleCompleted {
        pos: GridPos,
        /// Whole cycles shed by the wrap (more than 1 after a long stall).
        cycles: u32,
        tick: u64,
    },

    /// A producer credited the resource ledger this tick.
    ResourceProduced {
        pos: GridPos,
        /// The ledger increment, `rate * elapsed / cycle_duration`.
        amount: f64,
        tick: u64,
    },
}

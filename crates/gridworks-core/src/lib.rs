//! Gridworks Core -- a small production-chain simulation on a fixed 2D grid.
//!
//! Cells hold typed entities (generator, motor, producer) that pass a work
//! rate left-to-right along a row each tick and accumulate cyclical progress
//! over time, producing a numeric resource total. Rendering and input
//! translation live in the host; the host reads post-tick state through the
//! [`query`] snapshot API and writes pointer state through
//! [`engine::Engine::set_cursor`].
//!
//! # Tick Pipeline
//!
//! Each call to [`engine::Engine::step`] advances the simulation by one tick:
//!
//! 1. **Sequence** -- visit occupied cells in strict raster order (`x`
//!    fastest, then `y`).
//! 2. **Propagate** -- recompute each cell's rate from its kind, the cursor,
//!    and its left neighbor's rate (already recomputed this tick).
//! 3. **Ledger** -- producers credit the resource ledger from their rate.
//! 4. **Accumulate** -- wrap each cell's cycle progress into `[0,1)`, then
//!    advance it by elapsed time scaled by the rate.
//! 5. **Deliver** -- buffered events become drainable; the tick counter
//!    increments.
//!
//! The raster order in phase 1 is load-bearing: a motor reads its generator
//! neighbor's *same-tick* rate, and a producer its motor's, so the chain
//! behaves as a combinational cascade within one tick. See [`sequence`].
//!
//! # Key Types
//!
//! - [`engine::Engine`] -- owns all simulation state and runs the tick.
//! - [`grid::Grid`] -- dense row-major entity array; out-of-bounds lookups
//!   resolve to `None`, never an error.
//! - [`entity::EntityKind`] -- the closed variant set of cell contents.
//! - [`ledger::ResourceLedger`] -- the accumulated scalar output.
//! - [`query::CellSnapshot`] -- owned read-only view for rendering.
//! - [`event::Event`] -- buffered notifications drained by the host.

pub mod config;
pub mod cycle;
pub mod engine;
pub mod entity;
pub mod event;
pub mod grid;
pub mod input;
pub mod ledger;
pub mod query;
pub mod rate;
pub mod sequence;
pub mod sim;

//! The simulation engine: owns the grid and orchestrates the tick.
//!
//! # Architecture
//!
//! The `Engine` owns:
//! - A [`Grid`] of entities (dense, fixed size)
//! - A [`SimConfig`] (dimensions, reference cycle duration)
//! - A [`SimState`] (tick counter, frame-timestamp bookkeeping)
//! - The [`CursorState`] input slice, written only via [`Engine::set_cursor`]
//! - A [`ResourceLedger`] and the pending [`Event`] buffer
//!
//! There is no global state: hosts hold an `Engine` value and pass it into
//! their frame callback and input handlers. Handlers mutate the cursor slice
//! only; the grid and ledger are touched exclusively by the tick.
//!
//! # Ordering
//!
//! The tick visits occupied cells in raster order, and that order is
//! load-bearing: rate propagation reads the left neighbor's rate, which the
//! order has already recomputed this tick. The whole pass is strictly
//! sequential -- no intra-tick parallelism is safe.

use crate::config::{ConfigError, SimConfig};
use crate::cycle;
use crate::entity::EntityKind;
use crate::event::Event;
use crate::grid::{Grid, GridPos};
use crate::input::CursorState;
use crate::ledger::ResourceLedger;
use crate::rate;
use crate::sequence;
use crate::sim::SimState;

/// The core simulation engine.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) grid: Grid,
    pub(crate) config: SimConfig,
    pub(crate) sim_state: SimState,
    pub(crate) cursor: CursorState,
    pub(crate) ledger: ResourceLedger,
    pub(crate) events: Vec<Event>,
}

impl Engine {
    /// Create an engine with an all-empty grid. Fails on a malformed config;
    /// the grid is never built from one.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            config,
            sim_state: SimState::new(),
            cursor: CursorState::default(),
            ledger: ResourceLedger::new(),
            events: Vec::new(),
        })
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Assign a cell's kind. Intended for setup; returns false out of bounds.
    pub fn place(&mut self, pos: GridPos, kind: EntityKind) -> bool {
        self.grid.place(pos, kind)
    }

    // -----------------------------------------------------------------------
    // Input slice
    // -----------------------------------------------------------------------

    /// Update the cursor input slice. The only mutation path offered to
    /// pointer-event handlers; coordinates are in grid space (the host
    /// translates from device pixels).
    pub fn set_cursor(&mut self, x: f64, y: f64, pressed: bool) {
        self.cursor = CursorState { x, y, pressed };
    }

    // -----------------------------------------------------------------------
    // Tick
    // -----------------------------------------------------------------------

    /// Frame-callback entry point. Computes the elapsed time from successive
    /// timestamps (the first call seeds and runs a zero-delta tick) and runs
    /// one tick.
    pub fn advance(&mut self, now_ms: f64) {
        let elapsed_ms = self.sim_state.elapsed(now_ms);
        self.step(elapsed_ms);
    }

    /// Run one tick with an explicit elapsed time, visiting occupied cells
    /// in raster order.
    pub fn step(&mut self, elapsed_ms: f64) {
        let order = sequence::raster(self.config.width, self.config.height);
        self.step_ordered(order, elapsed_ms);
    }

    /// The tick body over an explicit visitation order. Kept separate so
    /// tests can demonstrate what a wrong order does; all public entry
    /// points use raster order.
    fn step_ordered<I>(&mut self, order: I, elapsed_ms: f64)
    where
        I: IntoIterator<Item = GridPos>,
    {
        let cycle_ms = self.config.cycle_duration_ms;
        let tick = self.sim_state.tick;

        for pos in order {
            let Some(kind) = self.grid.resolve(pos).map(|cell| cell.kind) else {
                continue;
            };
            if !kind.is_occupied() {
                continue;
            }

            // Phase 2: recompute the rate. Reads the left neighbor, which
            // raster order visited earlier this same tick.
            let new_rate = rate::propagate(&self.grid, pos, &self.cursor);

            // Phase 3: producers credit the ledger.
            if kind == EntityKind::Producer {
                let amount = self.ledger.record(new_rate, elapsed_ms, cycle_ms);
                if amount > 0.0 {
                    self.events.push(Event::ResourceProduced { pos, amount, tick });
                }
            }

            // Phase 4: wrap-then-add cycle accumulation.
            let Some(cell) = self.grid.resolve_mut(pos) else {
                continue;
            };
            cell.rate = new_rate;
            let (progress, cycles) =
                cycle::advance(cell.cycle_progress, new_rate, elapsed_ms, cycle_ms);
            cell.cycle_progress = progress;
            if cycles > 0 {
                self.events.push(Event::CycleCompleted { pos, cycles, tick });
            }
        }

        self.sim_state.tick += 1;
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Take all events buffered since the previous drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_engine() -> Engine {
        let config = SimConfig::new(10, 10, 1000.0).unwrap();
        let mut engine = Engine::new(config).unwrap();
        engine.place(GridPos::new(0, 5), EntityKind::Generator);
        engine.place(GridPos::new(1, 5), EntityKind::Motor);
        engine.place(GridPos::new(2, 5), EntityKind::Producer);
        engine
    }

    fn rate_at(engine: &Engine, x: i32, y: i32) -> f64 {
        engine.grid.resolve(GridPos::new(x, y)).unwrap().rate
    }

    #[test]
    fn raster_tick_cascades_within_one_tick() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);
        engine.step(500.0);

        assert_eq!(rate_at(&engine, 0, 5), 1.0);
        assert_eq!(rate_at(&engine, 1, 5), 0.5);
        assert_eq!(rate_at(&engine, 2, 5), 0.4);
    }

    #[test]
    fn deactivation_zeroes_the_chain_same_tick() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);
        engine.step(500.0);

        engine.set_cursor(0.5, 5.5, false);
        engine.step(500.0);

        assert_eq!(rate_at(&engine, 0, 5), 0.0);
        assert_eq!(rate_at(&engine, 1, 5), 0.0);
        assert_eq!(rate_at(&engine, 2, 5), 0.0);
    }

    /// Right-to-left traversal makes each cell read its neighbor's
    /// previous-tick rate: the cascade takes one extra tick per hop. This is
    /// the behavior the raster order exists to rule out.
    #[test]
    fn reversed_traversal_produces_one_tick_stale_rates() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);
        let reversed = [GridPos::new(2, 5), GridPos::new(1, 5), GridPos::new(0, 5)];

        engine.step_ordered(reversed, 500.0);
        // Tick 1: motor and producer both read pre-tick zeros.
        assert_eq!(rate_at(&engine, 0, 5), 1.0);
        assert_eq!(rate_at(&engine, 1, 5), 0.0);
        assert_eq!(rate_at(&engine, 2, 5), 0.0);

        engine.step_ordered(reversed, 500.0);
        // Tick 2: motor sees the generator's tick-1 rate; the producer still
        // sees the motor's tick-1 zero.
        assert_eq!(rate_at(&engine, 1, 5), 0.5);
        assert_eq!(rate_at(&engine, 2, 5), 0.0);

        engine.step_ordered(reversed, 500.0);
        // Tick 3: the stale value finally reaches the producer.
        assert_eq!(rate_at(&engine, 2, 5), 0.4);
    }

    #[test]
    fn out_of_bounds_positions_in_order_are_skipped() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);
        let order = [
            GridPos::new(-1, 5),
            GridPos::new(0, 5),
            GridPos::new(1, 5),
            GridPos::new(2, 5),
            GridPos::new(99, 99),
        ];
        engine.step_ordered(order, 500.0);
        assert_eq!(rate_at(&engine, 2, 5), 0.4);
    }

    #[test]
    fn oversized_config_is_rejected_before_the_grid_is_built() {
        // Bypasses SimConfig::new so Engine::new must do its own rejection;
        // this product would overflow a u32 cell count.
        let config = SimConfig {
            width: 131_072,
            height: 32_769,
            cycle_duration_ms: 1000.0,
        };
        assert!(Engine::new(config).is_err());
    }

    #[test]
    fn empty_cells_do_not_tick() {
        let config = SimConfig::new(3, 3, 1000.0).unwrap();
        let mut engine = Engine::new(config).unwrap();
        engine.step(500.0);
        for y in 0..3 {
            for x in 0..3 {
                let cell = engine.grid.resolve(GridPos::new(x, y)).unwrap();
                assert_eq!(cell.rate, 0.0);
                assert_eq!(cell.cycle_progress, 0.0);
            }
        }
        assert_eq!(engine.ledger.total(), 0.0);
    }

    #[test]
    fn tick_counter_advances_per_step() {
        let mut engine = chain_engine();
        engine.step(16.0);
        engine.step(16.0);
        assert_eq!(engine.sim_state.tick, 2);
    }

    #[test]
    fn first_frame_advance_runs_a_zero_delta_tick() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);
        engine.advance(10_000.0);

        // Rates cascade even on the zero-delta tick; progress does not move.
        assert_eq!(rate_at(&engine, 2, 5), 0.4);
        let producer = engine.grid.resolve(GridPos::new(2, 5)).unwrap();
        assert_eq!(producer.cycle_progress, 0.0);
        assert_eq!(engine.ledger.total(), 0.0);

        engine.advance(10_500.0);
        assert_eq!(engine.ledger.total(), 0.2);
    }

    #[test]
    fn events_record_production_and_cycle_completion() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);

        engine.step(500.0);
        let events = engine.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            Event::ResourceProduced { pos, amount, tick: 0 }
                if *pos == GridPos::new(2, 5) && *amount == 0.2
        )));

        // Two more half-cycle ticks push the generator past a full cycle;
        // the wrap (and its event) lands on the tick after the overflow.
        engine.step(500.0);
        engine.step(500.0);
        let events = engine.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            Event::CycleCompleted { pos, cycles: 1, .. } if *pos == GridPos::new(0, 5)
        )));
    }

    #[test]
    fn drained_events_do_not_reappear() {
        let mut engine = chain_engine();
        engine.set_cursor(0.5, 5.5, true);
        engine.step(500.0);
        assert!(!engine.drain_events().is_empty());
        assert!(engine.drain_events().is_empty());
    }
}

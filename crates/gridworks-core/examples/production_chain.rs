//! Production chain example: generator -> motor -> producer.
//!
//! Drives the engine headlessly with synthetic frame timestamps, holding the
//! cursor over the generator, and prints per-frame state plus the resource
//! total.
//!
//! Run with: `cargo run -p gridworks-core --example production_chain`

use gridworks_core::config::SimConfig;
use gridworks_core::engine::Engine;
use gridworks_core::entity::EntityKind;
use gridworks_core::event::Event;
use gridworks_core::grid::GridPos;

fn main() {
    let config = SimConfig::new(10, 10, 1000.0).expect("valid config");
    let mut engine = Engine::new(config).expect("valid engine");

    // --- Lay out the chain on row 5 ---

    engine.place(GridPos::new(0, 5), EntityKind::Generator);
    engine.place(GridPos::new(1, 5), EntityKind::Motor);
    engine.place(GridPos::new(2, 5), EntityKind::Producer);

    // --- Hold the cursor over the generator ---

    engine.set_cursor(0.5, 5.5, true);

    // --- Run 3 seconds of 100ms frames ---

    for frame in 0..=30u32 {
        let now_ms = f64::from(frame) * 100.0;
        engine.advance(now_ms);

        for event in engine.drain_events() {
            match event {
                Event::CycleCompleted { pos, cycles, tick } => {
                    println!("tick {tick:>2}: ({}, {}) completed {cycles} cycle(s)", pos.x, pos.y);
                }
                Event::ResourceProduced { amount, tick, .. } => {
                    println!("tick {tick:>2}: produced {amount:.3}");
                }
            }
        }
    }

    // --- Final state ---

    println!();
    for cell in engine.cells() {
        println!(
            "({}, {}) {:?}: rate {:.2}, cycle progress {:.2}",
            cell.pos.x, cell.pos.y, cell.kind, cell.rate, cell.cycle_progress
        );
    }
    println!("resource total: {:.3}", engine.ledger_total());
}

//! Raster-order traversal of the grid.
//!
//! Both functions here are stateless: each call builds a fresh, lazy, finite
//! iterator, so the sequence restarts by reconstruction rather than by
//! rewinding a mutable cursor.
//!
//! The order is strict row-major -- `x` varies fastest from 0, then `y` --
//! and it is load-bearing. Rate propagation reads the neighbor at `(x-1, y)`,
//! which this order visits strictly earlier in the same row, so every read
//! observes the current tick's freshly computed rate. Column-major or
//! right-to-left traversal would hand downstream cells a one-tick-stale
//! value and must not be used.

use crate::grid::{Grid, GridPos};

/// All in-bounds positions of a `width x height` grid in row-major order.
pub fn raster(width: u32, height: u32) -> impl Iterator<Item = GridPos> {
    let w = width as i32;
    let h = height as i32;
    (0..h).flat_map(move |y| (0..w).map(move |x| GridPos::new(x, y)))
}

/// Positions of occupied cells (kind other than `None`), in raster order.
pub fn occupied(grid: &Grid) -> impl Iterator<Item = GridPos> + '_ {
    raster(grid.width(), grid.height()).filter(|&pos| {
        grid.resolve(pos)
            .is_some_and(|cell| cell.kind.is_occupied())
    })
}

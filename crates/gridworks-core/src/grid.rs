//! The grid model: a dense row-major array of entities with Option-returning
//! position lookups.
//!
//! Out-of-bounds positions resolve to `None` -- absence is a first-class,
//! expected outcome used routinely for edge-of-grid neighbor lookups, not an
//! error. In-bounds cells always hold a valid [`Entity`]; the empty state is
//! [`EntityKind::None`], which is distinct from absence.

use crate::entity::{Entity, EntityKind};

// ---------------------------------------------------------------------------
// Grid position
// ---------------------------------------------------------------------------

/// A position on the 2D grid. Coordinates are signed so that out-of-bounds
/// neighbors (including negative ones) are expressible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell immediately to the left, `(x-1, y)`. May be out of bounds;
    /// resolve it through the grid.
    pub fn left(self) -> GridPos {
        GridPos::new(self.x - 1, self.y)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size 2D grid of entities, stored row-major: `(x, y)` maps to
/// index `y * width + x`. Dimensions are fixed at construction; cells are
/// never added or removed, only mutated in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Entity>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell empty.
    ///
    /// Dimension validation happens in [`crate::config::SimConfig`]; callers
    /// construct through [`crate::engine::Engine::new`].
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Entity::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major index for an in-bounds position, `None` otherwise.
    fn index(&self, pos: GridPos) -> Option<usize> {
        if pos.x >= 0 && (pos.x as u32) < self.width && pos.y >= 0 && (pos.y as u32) < self.height {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// The entity at `pos`, or `None` if the position is out of bounds.
    pub fn resolve(&self, pos: GridPos) -> Option<&Entity> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Mutable access to the entity at `pos`, or `None` if out of bounds.
    pub fn resolve_mut(&mut self, pos: GridPos) -> Option<&mut Entity> {
        self.index(pos).map(|i| &mut self.cells[i])
    }

    /// Assign a cell's kind, resetting its rate and progress. Returns false
    /// if the position is out of bounds.
    pub(crate) fn place(&mut self, pos: GridPos, kind: EntityKind) -> bool {
        match self.resolve_mut(pos) {
            Some(cell) => {
                *cell = Entity::new(kind);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_in_bounds_returns_entity() {
        let grid = Grid::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let cell = grid.resolve(GridPos::new(x, y));
                assert!(cell.is_some(), "({x},{y}) should resolve");
                assert_eq!(cell.unwrap().kind, EntityKind::None);
            }
        }
    }

    #[test]
    fn resolve_out_of_bounds_is_absent() {
        let grid = Grid::new(4, 3);
        for pos in [
            GridPos::new(-1, 0),
            GridPos::new(0, -1),
            GridPos::new(4, 0),
            GridPos::new(0, 3),
            GridPos::new(i32::MIN, i32::MAX),
        ] {
            assert!(grid.resolve(pos).is_none(), "{pos:?} should be absent");
        }
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = Grid::new(5, 4);
        grid.place(GridPos::new(3, 2), EntityKind::Motor);
        // y * width + x = 2 * 5 + 3 = 13
        assert_eq!(grid.cells[13].kind, EntityKind::Motor);
    }

    #[test]
    fn place_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(2, 2);
        assert!(!grid.place(GridPos::new(2, 0), EntityKind::Generator));
        assert!(grid.place(GridPos::new(1, 1), EntityKind::Generator));
    }

    #[test]
    fn left_neighbor_of_edge_cell_is_absent() {
        let grid = Grid::new(3, 3);
        let edge = GridPos::new(0, 1);
        assert!(grid.resolve(edge.left()).is_none());
    }

    #[test]
    fn place_resets_cell_state() {
        let mut grid = Grid::new(2, 1);
        let pos = GridPos::new(0, 0);
        grid.resolve_mut(pos).unwrap().cycle_progress = 0.7;
        grid.place(pos, EntityKind::Producer);
        let cell = grid.resolve(pos).unwrap();
        assert_eq!(cell.cycle_progress, 0.0);
        assert_eq!(cell.rate, 0.0);
    }
}

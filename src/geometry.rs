//! Grid geometry: cells, the four cardinal moves, and the adjacency
//! predicates shared by the solution carver and the fake-branch walker.

use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` is the column, `y` the row, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Edge adjacency: one unit apart along exactly one axis. No diagonals.
    pub fn touches(self, other: Cell) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    /// The cell one step in this direction, or `None` when the step would
    /// leave `u32` range. Grid-bounds checks stay with the callers.
    pub fn step(self, from: Cell) -> Option<Cell> {
        match self {
            Dir::Up => from.y.checked_sub(1).map(|y| Cell::new(from.x, y)),
            Dir::Right => Some(Cell::new(from.x + 1, from.y)),
            Dir::Down => Some(Cell::new(from.x, from.y + 1)),
            Dir::Left => from.x.checked_sub(1).map(|x| Cell::new(x, from.y)),
        }
    }
}

/// True when taking `dir` would exactly undo `last`.
pub fn is_opposite(dir: Dir, last: Dir) -> bool {
    dir == last.opposite()
}

/// True when `target` is edge-adjacent to any cell of `path` except the
/// path's last element. The last element is the walk head; adjacency to it
/// is how the walk extends, not a violation.
pub fn touches_path(path: &[Cell], target: Cell) -> bool {
    let scan = path.len().saturating_sub(1);
    path[..scan].iter().any(|&c| c.touches(target))
}

/// Like [`touches_path`] but the last element counts too. Used to detect a
/// deliberate join against a finished path.
pub fn joins_path(path: &[Cell], target: Cell) -> bool {
    path.iter().any(|&c| c.touches(target))
}

/// True when `cell` lies on the outer edge of a `size` x `size` grid.
pub fn is_boundary(cell: Cell, size: u32) -> bool {
    cell.x == 0 || cell.y == 0 || cell.x == size - 1 || cell.y == size - 1
}

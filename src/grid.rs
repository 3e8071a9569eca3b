//! The square wall/route grid both generators mark into.

use serde::{Deserialize, Serialize};

use crate::geometry::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Wall,
    Route,
}

/// A square grid of wall/route cells, row-major, never resized after
/// creation. Starts all wall; generators carve routes into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u32,
    cells: Vec<CellKind>,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        let size = size.max(2);
        let cells = vec![CellKind::Wall; (size as usize) * (size as usize)];
        Self { size, cells }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn idx(&self, cell: Cell) -> usize {
        (cell.y as usize) * (self.size as usize) + (cell.x as usize)
    }

    /// Out-of-bounds reads as wall so a bad coordinate can never fake a route.
    pub fn get(&self, cell: Cell) -> CellKind {
        if cell.x >= self.size || cell.y >= self.size {
            return CellKind::Wall;
        }
        self.cells[self.idx(cell)]
    }

    pub fn is_route(&self, cell: Cell) -> bool {
        self.get(cell) == CellKind::Route
    }

    /// Marks every cell of `path` as route. Cells outside the grid are
    /// ignored.
    pub fn mark_path(&mut self, path: &[Cell]) {
        for &cell in path {
            if cell.x < self.size && cell.y < self.size {
                let i = self.idx(cell);
                self.cells[i] = CellKind::Route;
            }
        }
    }

    pub fn route_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == CellKind::Route).count()
    }

    /// Fraction of all cells marked route, in [0, 1].
    pub fn route_fraction(&self) -> f32 {
        self.route_count() as f32 / self.cells.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_wall() {
        let g = Grid::new(7);
        assert_eq!(g.route_count(), 0);
        assert_eq!(g.get(Cell::new(3, 3)), CellKind::Wall);
        assert_eq!(g.route_fraction(), 0.0);
    }

    #[test]
    fn mark_path_sets_route() {
        let mut g = Grid::new(5);
        g.mark_path(&[Cell::new(1, 1), Cell::new(2, 1)]);
        assert!(g.is_route(Cell::new(1, 1)));
        assert!(g.is_route(Cell::new(2, 1)));
        assert!(!g.is_route(Cell::new(3, 1)));
        assert_eq!(g.route_count(), 2);
        assert!((g.route_fraction() - 2.0 / 25.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let g = Grid::new(5);
        assert_eq!(g.get(Cell::new(5, 0)), CellKind::Wall);
        assert_eq!(g.get(Cell::new(0, 99)), CellKind::Wall);
    }
}

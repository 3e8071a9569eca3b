//! The fake-branch walker: dead-end offshoots that thicken the maze
//! without opening a second way through.
//!
//! A branch seeds at a random interior cell clear of every existing path,
//! then wanders until it comes up against the solution or an earlier branch.
//! That final adjacency is the join that attaches it to the maze. Branches
//! never step onto the boundary, which is the whole guarantee that no
//! second boundary-to-boundary route can form.

use crate::geometry::{self, Cell, Dir};
use crate::prng::Prng;

/// Grows one fake branch against the current solution and branch set, or
/// `None` when no valid seed turns up or the walk dies before joining.
/// Nothing is recorded on failure; the caller just re-checks the fill ratio.
pub fn grow(
    size: u32,
    solution: &[Cell],
    branches: &[Vec<Cell>],
    rng: &mut Prng,
) -> Option<Vec<Cell>> {
    let seed = find_seed(size, solution, branches, rng)?;

    let mut path = vec![seed];
    let mut head = seed;
    let mut last_dir: Option<Dir> = None;

    loop {
        let mut choices: Vec<Dir> = Dir::ALL.to_vec();
        let mut advanced = false;

        while !choices.is_empty() {
            let pick = rng.gen_range_usize(0, choices.len());
            let dir = choices.swap_remove(pick);

            if last_dir.is_some_and(|last| geometry::is_opposite(dir, last)) {
                continue;
            }
            let Some(target) = dir.step(head) else {
                continue;
            };
            if geometry::is_boundary(target, size) {
                continue;
            }
            if geometry::touches_path(&path, target) {
                continue;
            }

            path.push(target);
            head = target;
            last_dir = Some(dir);
            advanced = true;
            break;
        }

        if !advanced {
            // Walled in before joining anything; drop the whole attempt.
            return None;
        }
        // Touching another path is the success condition, not a violation:
        // the branch deliberately joins there and stops.
        if joins_any(solution, branches, head) {
            return Some(path);
        }
    }
}

/// Samples interior cells until one is clear of the solution and every
/// existing branch (neither on nor next to them). Bounded at `size`^2 draws
/// so a saturated grid cannot spin forever.
fn find_seed(
    size: u32,
    solution: &[Cell],
    branches: &[Vec<Cell>],
    rng: &mut Prng,
) -> Option<Cell> {
    let attempts = (size as usize) * (size as usize);
    for _ in 0..attempts {
        let cell = Cell::new(rng.gen_range_u32(1, size - 1), rng.gen_range_u32(1, size - 1));
        // Adjacency covers membership too: every path cell has a path
        // neighbor, so a cell on a path always joins it.
        if !joins_any(solution, branches, cell) {
            return Some(cell);
        }
    }
    None
}

fn joins_any(solution: &[Cell], branches: &[Vec<Cell>], cell: Cell) -> bool {
    geometry::joins_path(solution, cell) || branches.iter().any(|b| geometry::joins_path(b, cell))
}

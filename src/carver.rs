//! The solution-path carver: a randomized self-avoiding walk from one
//! boundary cell to another.
//!
//! The walk never backtracks. When the head has no legal continuation the
//! whole attempt is discarded and the caller restarts with fresh randomness.
//! Restart-on-failure keeps each attempt O(path length); mazes are small
//! enough that redundant attempts are cheaper than real backtracking.

use crate::geometry::{self, Cell, Dir};
use crate::prng::Prng;

/// Walks a solution path across a `size` x `size` grid, or `None` when the
/// walk gets stuck before reaching a boundary cell at `min_steps` edges.
///
/// The returned path starts and ends on the boundary, moves one cell per
/// step, and no two non-consecutive cells are edge-adjacent. Assumes
/// `size >= 5`; the orchestrator validates that before calling.
pub fn carve(size: u32, min_steps: u32, rng: &mut Prng) -> Option<Vec<Cell>> {
    // Entry on the top or left edge, never a corner. The first step inward
    // is committed up front so the walk cannot exit where it entered.
    let offset = rng.gen_range_u32(1, size - 1);
    let (entry, first, mut last_dir) = if rng.next_bool() {
        (Cell::new(offset, 0), Cell::new(offset, 1), Dir::Down)
    } else {
        (Cell::new(0, offset), Cell::new(1, offset), Dir::Right)
    };

    let mut path = vec![entry, first];
    let mut head = first;
    let mut steps: u32 = 1; // edges walked so far

    loop {
        let mut choices: Vec<Dir> = Dir::ALL.to_vec();
        let mut advanced = false;

        while !choices.is_empty() {
            let pick = rng.gen_range_usize(0, choices.len());
            let dir = choices.swap_remove(pick);

            if geometry::is_opposite(dir, last_dir) {
                continue;
            }
            // The head is always interior, so a step can never leave the grid.
            let Some(target) = dir.step(head) else {
                continue;
            };
            // Adjacency to anything but the head would open a shortcut. This
            // applies to the finish cell too, so the entrance and exit can
            // never end up side by side.
            if geometry::touches_path(&path, target) {
                continue;
            }
            if geometry::is_boundary(target, size) {
                if steps + 1 < min_steps {
                    // Too short to finish here; this edge cell stays closed.
                    continue;
                }
                path.push(target);
                return Some(path);
            }

            path.push(target);
            head = target;
            last_dir = dir;
            steps += 1;
            advanced = true;
            break;
        }

        if !advanced {
            // Dead end. No in-walk backtracking; the caller retries.
            return None;
        }
    }
}

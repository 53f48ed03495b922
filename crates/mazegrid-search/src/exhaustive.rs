//! Exhaustive search: first-in-first-out expansion of the whole frontier.

use std::collections::{HashMap, HashSet, VecDeque};

use mazegrid_core::{Coord, GridGraph};

use crate::path;

/// Find a path from the grid's Current cell to its Goal cell by expanding
/// the frontier in first-discovered order.
///
/// The queue discipline makes this the only strategy with a shortest-path
/// guarantee: the returned path has minimal step count. Returns `None`
/// when either marker is unset or the goal is unreachable.
pub fn find_path_exhaustive(grid: &GridGraph) -> Option<Vec<Coord>> {
    let start = grid.current()?;
    let goal = grid.goal()?;

    let mut seen: HashSet<Coord> = HashSet::from([start]);
    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut frontier: VecDeque<Coord> = VecDeque::from([start]);

    while let Some(pos) = frontier.pop_front() {
        if pos == goal {
            return Some(path::rebuild(&parents, start, goal));
        }
        for next in grid.neighbors(pos) {
            if seen.insert(next) {
                parents.insert(next, pos);
                frontier.push_back(next);
            }
        }
    }
    None
}

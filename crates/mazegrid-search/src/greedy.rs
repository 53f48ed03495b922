//! Greedy best-first search ordered by Manhattan distance to the goal.

use std::collections::{HashMap, HashSet};

use mazegrid_core::{Coord, GridGraph};

use crate::distance::manhattan;
use crate::frontier::{Candidate, Frontier};
use crate::path;

/// Find a path from the grid's Current cell to its Goal cell, always
/// expanding the frontier cell closest to the goal by Manhattan distance.
///
/// Complete over the reachable region but not optimal: the heuristic can
/// lead the search into a cul-de-sac it then has to pay for. Returns
/// `None` when either marker is unset or the goal is unreachable.
pub fn find_path_greedy(grid: &GridGraph) -> Option<Vec<Coord>> {
    let start = grid.current()?;
    let goal = grid.goal()?;

    let mut seen: HashSet<Coord> = HashSet::from([start]);
    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut frontier = Frontier::new();
    frontier.push(Candidate {
        priority: manhattan(start, goal),
        pos: start,
    });

    while let Some(candidate) = frontier.pop_min() {
        let pos = candidate.pos;
        if pos == goal {
            return Some(path::rebuild(&parents, start, goal));
        }
        for next in grid.neighbors(pos) {
            if seen.insert(next) {
                parents.insert(next, pos);
                frontier.push(Candidate {
                    priority: manhattan(next, goal),
                    pos: next,
                });
            }
        }
    }
    None
}

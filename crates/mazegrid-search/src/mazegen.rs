//! Maze generation: perturb a grid with obstacles while guaranteeing it
//! stays solvable.
//!
//! Every mutation is anchored on *witness paths* — routes found by the
//! hybrid search before anything is blocked — so at least one start→goal
//! route survives each call.

use std::collections::HashSet;
use std::fmt;

use mazegrid_core::{CellState, Coord, GridError, GridGraph};
use rand::Rng;

use crate::hybrid::find_path_hybrid;

/// Obstacle generator. Owns its random source so that maze layouts are
/// reproducible from a seed.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around the given random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mark up to `n` cells Inactive without disconnecting start from
    /// goal.
    ///
    /// A hybrid-search witness path is found first; only cells off that
    /// path whose state is not Current, Goal or already Inactive are
    /// eligible, and `min(n, candidates)` of them are sampled uniformly
    /// without replacement. Returns the number of cells actually blocked.
    ///
    /// # Errors
    /// [`MazeGenError::NoWitnessPath`] if the grid has no start→goal route
    /// to protect.
    pub fn add_inactives(&mut self, grid: &mut GridGraph, n: usize) -> Result<usize, MazeGenError> {
        let witness: HashSet<Coord> = find_path_hybrid(grid, &mut self.rng)
            .ok_or(MazeGenError::NoWitnessPath)?
            .into_iter()
            .collect();

        let candidates = collect_cells(grid, |pos, state| {
            !witness.contains(&pos)
                && !matches!(
                    state,
                    CellState::Current | CellState::Goal | CellState::Inactive
                )
        });

        let count = n.min(candidates.len());
        if count < n {
            log::warn!(
                "requested {n} obstacles, only {} candidate cells",
                candidates.len()
            );
        }
        for idx in rand::seq::index::sample(&mut self.rng, candidates.len(), count) {
            grid.at_mut(candidates[idx])?.change_state(CellState::Inactive);
        }
        log::debug!(
            "blocked {count} cells, witness path of {} cells kept open",
            witness.len()
        );
        Ok(count)
    }

    /// Mark up to `n` Active cells Slow.
    ///
    /// Slow terrain stays passable, so solvability is never affected;
    /// only plain Active cells are eligible.
    pub fn add_slows(&mut self, grid: &mut GridGraph, n: usize) -> Result<usize, MazeGenError> {
        let candidates = collect_cells(grid, |_, state| state == CellState::Active);
        let count = n.min(candidates.len());
        for idx in rand::seq::index::sample(&mut self.rng, candidates.len(), count) {
            grid.at_mut(candidates[idx])?.change_state(CellState::Slow);
        }
        Ok(count)
    }

    /// Carve a maze with at least `n` guaranteed (possibly overlapping)
    /// routes.
    ///
    /// The witness search runs `n` times and the union of the routes is
    /// protected; every other cell that is not Current, Goal or already
    /// Inactive becomes Inactive. Returns the number of cells blocked.
    ///
    /// # Errors
    /// [`MazeGenError::NoWitnessPath`] if any witness search fails.
    pub fn make_n_paths(&mut self, grid: &mut GridGraph, n: usize) -> Result<usize, MazeGenError> {
        let mut protected: HashSet<Coord> = HashSet::new();
        for _ in 0..n {
            let witness =
                find_path_hybrid(grid, &mut self.rng).ok_or(MazeGenError::NoWitnessPath)?;
            protected.extend(witness);
        }

        let targets = collect_cells(grid, |pos, state| {
            !protected.contains(&pos)
                && !matches!(
                    state,
                    CellState::Current | CellState::Goal | CellState::Inactive
                )
        });
        for &pos in &targets {
            grid.at_mut(pos)?.change_state(CellState::Inactive);
        }
        log::debug!(
            "carved maze: {} cells protected by {n} witness runs, {} blocked",
            protected.len(),
            targets.len()
        );
        Ok(targets.len())
    }
}

/// Collect every coordinate whose cell passes `keep`, in column-major
/// order.
fn collect_cells(grid: &GridGraph, keep: impl Fn(Coord, CellState) -> bool) -> Vec<Coord> {
    let mut out = Vec::new();
    for col in 0..grid.width() {
        for row in 0..grid.height() {
            let pos = Coord::new(row, col);
            if let Some(state) = grid.state(pos) {
                if keep(pos, state) {
                    out.push(pos);
                }
            }
        }
    }
    out
}

/// Errors raised by maze generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeGenError {
    /// The grid has no start→goal route to protect.
    NoWitnessPath,
    /// A grid operation failed underneath the generator.
    Grid(GridError),
}

impl fmt::Display for MazeGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWitnessPath => write!(f, "no witness path from current to goal"),
            Self::Grid(err) => write!(f, "grid operation failed: {err}"),
        }
    }
}

impl std::error::Error for MazeGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::NoWitnessPath => None,
        }
    }
}

impl From<GridError> for MazeGenError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

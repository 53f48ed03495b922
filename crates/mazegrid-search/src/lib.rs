//! Path-search strategies and maze generation for cell-state grids.
//!
//! Four search strategies over a [`GridGraph`](mazegrid_core::GridGraph)'s
//! neighbor/state contract, all returning the discovered start→goal path
//! (or `None` when no route exists):
//!
//! - **Exhaustive** queue-ordered search ([`find_path_exhaustive`]) — the
//!   only strategy with a shortest-path guarantee
//! - **Depth-first** with randomized neighbor order ([`find_path_dfs`])
//! - **Greedy best-first** by Manhattan distance ([`find_path_greedy`])
//! - **Hybrid greedy/random** ([`find_path_hybrid`]) — random frontier
//!   pops for the first ten expansions, then pure greedy; the variety this
//!   produces is what makes generated mazes interesting
//!
//! None of the searches mutates the grid; replaying a returned path with
//! `set_current` is the caller's job. The obstacle generator ([`MazeGen`])
//! perturbs a grid into a maze while guaranteeing at least one route
//! survives.
//!
//! All randomness is injected as `rand::Rng` implementations, so a seeded
//! generator reproduces searches and mazes exactly.

mod dfs;
mod distance;
mod exhaustive;
mod frontier;
mod greedy;
mod hybrid;
mod mazegen;
mod path;

pub use dfs::find_path_dfs;
pub use distance::manhattan;
pub use exhaustive::find_path_exhaustive;
pub use frontier::{Candidate, Frontier};
pub use greedy::find_path_greedy;
pub use hybrid::find_path_hybrid;
pub use mazegen::{MazeGen, MazeGenError};

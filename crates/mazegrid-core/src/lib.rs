//! **mazegrid-core** — a finite 2D grid modelled as a graph whose cells
//! carry mutable traversal state.
//!
//! This crate provides the foundational types used across the *mazegrid*
//! workspace: grid coordinates, the six-state cell model with
//! revert-to-previous transitions, the [`GridGraph`] itself (neighbor
//! enumeration, Current/Goal markers, path costing) and the
//! [`GridSnapshot`] total-state serialization contract.
//!
//! Search strategies and maze generation live in `mazegrid-search`; the
//! generic graph algorithms the grid conceptually specializes live in
//! `mazegrid-graph`.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod snapshot;

pub use cell::{Cell, CellState};
pub use coord::Coord;
pub use error::GridError;
pub use grid::{DIRECTIONS, GridGraph};
pub use snapshot::GridSnapshot;

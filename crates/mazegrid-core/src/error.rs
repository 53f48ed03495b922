//! Error types for grid and cell operations.

use std::fmt;

use crate::cell::CellState;
use crate::coord::Coord;

/// Errors raised by grid and cell operations.
///
/// `NoPreviousState`, `FlipInvalid` and `UndefinedCost` are caller contract
/// violations; `OutOfBounds` and `SnapshotShape` are bad-input errors. None
/// of them is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside the grid extent.
    OutOfBounds {
        pos: Coord,
        width: usize,
        height: usize,
    },
    /// A revert was requested on a cell that never transitioned.
    NoPreviousState,
    /// `flip_active` on a cell that is neither Active nor Inactive.
    FlipInvalid(CellState),
    /// Cost query on a state with no defined traversal cost.
    UndefinedCost(CellState),
    /// A snapshot whose cell matrix does not match its declared dimensions.
    SnapshotShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} outside {width}x{height} grid")
            }
            Self::NoPreviousState => write!(f, "cell has no previous state to revert to"),
            Self::FlipInvalid(state) => {
                write!(f, "cannot flip a {state} cell, only Active or Inactive")
            }
            Self::UndefinedCost(state) => {
                write!(f, "no traversal cost defined for a {state} cell")
            }
            Self::SnapshotShape { expected, found } => {
                write!(
                    f,
                    "snapshot cell matrix is {}x{}, header says {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

//! Total-state grid serialization.

use crate::cell::CellState;
use crate::coord::Coord;
use crate::error::GridError;

/// A full-state snapshot of a [`GridGraph`](crate::grid::GridGraph).
///
/// `cells` is column-major (outer index = column), matching the grid's
/// internal layout. This struct is the entire contract a persistence
/// collaborator needs: with the `serde` feature it derives
/// `Serialize`/`Deserialize`, so writing it to a structured file format is
/// a one-liner on the collaborator's side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<CellState>>,
    pub current: Option<Coord>,
    pub goal: Option<Coord>,
}

impl GridSnapshot {
    /// Verify that the cell matrix matches the declared dimensions.
    pub(crate) fn check_shape(&self) -> Result<(), GridError> {
        let columns = self.cells.len();
        let bad_rows = self
            .cells
            .iter()
            .map(Vec::len)
            .find(|&len| len != self.height);
        if columns != self.width || bad_rows.is_some() {
            return Err(GridError::SnapshotShape {
                expected: (self.width, self.height),
                found: (columns, bad_rows.unwrap_or(self.height)),
            });
        }
        Ok(())
    }
}

//! The cell state model: a two-slot state holder with explicit transitions.

use std::fmt;

use crate::error::GridError;

/// Traversal state of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Passable, cost 1.
    Active,
    /// Impassable; a search must never enter an Inactive cell.
    Inactive,
    /// Passable but expensive, cost 5.
    Slow,
    /// Passable, cost 1; marks the search cursor.
    Current,
    /// A cell the cursor has left; no traversal cost is defined for it.
    Visited,
    /// Passable, cost 1; marks the destination.
    Goal,
}

impl CellState {
    /// Whether a search may enter a cell in this state.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Slow => "Slow",
            Self::Current => "Current",
            Self::Visited => "Visited",
            Self::Goal => "Goal",
        };
        f.write_str(name)
    }
}

/// A grid cell: its current state plus the state it last transitioned from.
///
/// Cells start Active and are only ever mutated through the transition
/// methods, which record the old state so one level of revert is always
/// possible after the first transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    state: CellState,
    previous: Option<CellState>,
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            state: CellState::Active,
            previous: None,
        }
    }
}

impl Cell {
    /// Construct a cell directly in `state`, with no transition history.
    ///
    /// Used when restoring a grid from a snapshot; a revert on such a cell
    /// fails until the next transition.
    #[inline]
    pub const fn with_state(state: CellState) -> Self {
        Self {
            state,
            previous: None,
        }
    }

    /// The current state.
    #[inline]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// The state recorded by the last transition, if any.
    #[inline]
    pub const fn previous_state(&self) -> Option<CellState> {
        self.previous
    }

    /// Transition to `state`, recording the old state for a later revert.
    pub fn change_state(&mut self, state: CellState) {
        self.previous = Some(self.state);
        self.state = state;
    }

    /// Undo the last transition.
    ///
    /// # Errors
    /// [`GridError::NoPreviousState`] if the cell never transitioned.
    pub fn revert_state(&mut self) -> Result<(), GridError> {
        match self.previous {
            Some(previous) => {
                self.state = previous;
                Ok(())
            }
            None => Err(GridError::NoPreviousState),
        }
    }

    /// Mark this cell as the search cursor.
    pub fn make_current(&mut self) {
        self.change_state(CellState::Current);
    }

    /// Mark this cell as the destination.
    pub fn make_goal(&mut self) {
        self.change_state(CellState::Goal);
    }

    /// Toggle strictly between Active and Inactive.
    ///
    /// # Errors
    /// [`GridError::FlipInvalid`] for any other state.
    pub fn flip_active(&mut self) -> Result<(), GridError> {
        match self.state {
            CellState::Active => {
                self.change_state(CellState::Inactive);
                Ok(())
            }
            CellState::Inactive => {
                self.change_state(CellState::Active);
                Ok(())
            }
            other => Err(GridError::FlipInvalid(other)),
        }
    }

    /// Cost of stepping onto this cell.
    ///
    /// # Errors
    /// [`GridError::UndefinedCost`] for Inactive and Visited cells; paths
    /// returned by the search strategies never touch either.
    pub fn cost(&self) -> Result<u32, GridError> {
        match self.state {
            CellState::Active | CellState::Current | CellState::Goal => Ok(1),
            CellState::Slow => Ok(5),
            CellState::Inactive | CellState::Visited => Err(GridError::UndefinedCost(self.state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active_with_no_history() {
        let cell = Cell::default();
        assert_eq!(cell.state(), CellState::Active);
        assert_eq!(cell.previous_state(), None);
    }

    #[test]
    fn change_records_previous() {
        let mut cell = Cell::default();
        cell.change_state(CellState::Slow);
        assert_eq!(cell.state(), CellState::Slow);
        assert_eq!(cell.previous_state(), Some(CellState::Active));
    }

    #[test]
    fn revert_restores_previous() {
        let mut cell = Cell::default();
        cell.make_current();
        assert_eq!(cell.state(), CellState::Current);
        cell.revert_state().unwrap();
        assert_eq!(cell.state(), CellState::Active);
    }

    #[test]
    fn revert_without_history_fails() {
        let mut cell = Cell::default();
        assert_eq!(cell.revert_state(), Err(GridError::NoPreviousState));

        let mut restored = Cell::with_state(CellState::Goal);
        assert_eq!(restored.revert_state(), Err(GridError::NoPreviousState));
    }

    #[test]
    fn flip_toggles_between_active_and_inactive() {
        let mut cell = Cell::default();
        cell.flip_active().unwrap();
        assert_eq!(cell.state(), CellState::Inactive);
        cell.flip_active().unwrap();
        assert_eq!(cell.state(), CellState::Active);
    }

    #[test]
    fn flip_rejects_other_states() {
        let mut cell = Cell::default();
        cell.make_goal();
        assert_eq!(
            cell.flip_active(),
            Err(GridError::FlipInvalid(CellState::Goal))
        );
        assert_eq!(cell.state(), CellState::Goal);
    }

    #[test]
    fn costs() {
        assert_eq!(Cell::default().cost(), Ok(1));
        assert_eq!(Cell::with_state(CellState::Current).cost(), Ok(1));
        assert_eq!(Cell::with_state(CellState::Goal).cost(), Ok(1));
        assert_eq!(Cell::with_state(CellState::Slow).cost(), Ok(5));
        assert_eq!(
            Cell::with_state(CellState::Inactive).cost(),
            Err(GridError::UndefinedCost(CellState::Inactive))
        );
        assert_eq!(
            Cell::with_state(CellState::Visited).cost(),
            Err(GridError::UndefinedCost(CellState::Visited))
        );
    }

    #[test]
    fn passable_excludes_only_inactive() {
        assert!(CellState::Active.passable());
        assert!(CellState::Slow.passable());
        assert!(CellState::Visited.passable());
        assert!(!CellState::Inactive.passable());
    }
}

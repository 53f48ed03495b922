//! The [`GridGraph`] type — a finite 2D grid whose cells carry traversal
//! state.
//!
//! The grid owns its cell matrix exclusively; search strategies read it,
//! while replay (`set_current`) and the obstacle generator mutate it. Cell
//! storage is column-major, and the snapshot format mirrors that layout.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

use crate::cell::{Cell, CellState};
use crate::coord::Coord;
use crate::error::GridError;
use crate::snapshot::GridSnapshot;

/// The four orthogonal step directions as `(row, col)` deltas:
/// right, down, left, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A finite 2D grid of [`Cell`]s with Current/Goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    width: usize,
    height: usize,
    /// Column-major storage: index = col * height + row.
    cells: Vec<Cell>,
    current: Option<Coord>,
    goal: Option<Coord>,
}

impl GridGraph {
    /// Create a grid of the given dimensions with every cell Active and no
    /// markers set.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            current: None,
            goal: None,
        }
    }

    /// Create a grid with optional start and goal markers and a list of
    /// blocked cells.
    ///
    /// The start is marked Current and the goal Goal; every coordinate in
    /// `blocked` is then marked Inactive, unconditionally.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if any coordinate lies outside the grid.
    pub fn with_layout(
        width: usize,
        height: usize,
        start: Option<Coord>,
        goal: Option<Coord>,
        blocked: &[Coord],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height);
        if let Some(pos) = start {
            grid.set_current(pos)?;
        }
        if let Some(pos) = goal {
            grid.set_goal(pos)?;
        }
        for &pos in blocked {
            grid.at_mut(pos)?.change_state(CellState::Inactive);
        }
        Ok(grid)
    }

    /// Width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` lies inside the grid.
    #[inline]
    pub fn contains(&self, pos: Coord) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Coord) -> usize {
        pos.col * self.height + pos.row
    }

    fn oob(&self, pos: Coord) -> GridError {
        GridError::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        }
    }

    /// The cell at `pos`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] outside the grid.
    pub fn at(&self, pos: Coord) -> Result<&Cell, GridError> {
        if !self.contains(pos) {
            return Err(self.oob(pos));
        }
        Ok(&self.cells[self.index(pos)])
    }

    /// Mutable access to the cell at `pos`.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] outside the grid.
    pub fn at_mut(&mut self, pos: Coord) -> Result<&mut Cell, GridError> {
        if !self.contains(pos) {
            return Err(self.oob(pos));
        }
        let idx = self.index(pos);
        Ok(&mut self.cells[idx])
    }

    /// State of the cell at `pos`, or `None` outside the grid.
    pub fn state(&self, pos: Coord) -> Option<CellState> {
        self.contains(pos)
            .then(|| self.cells[self.index(pos)].state())
    }

    /// Position of the Current marker, if set.
    #[inline]
    pub fn current(&self) -> Option<Coord> {
        self.current
    }

    /// Position of the Goal marker, if set.
    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Move the Current marker to `pos`.
    ///
    /// The target cell becomes Current; the previously Current cell is
    /// reverted to its pre-Current state and then marked Visited. Setting
    /// the marker on the cell that already carries it leaves that cell
    /// Current.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] outside the grid.
    pub fn set_current(&mut self, pos: Coord) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(self.oob(pos));
        }
        let previous = self.current.replace(pos);
        let idx = self.index(pos);
        self.cells[idx].make_current();
        if let Some(old) = previous {
            if old != pos {
                let idx = self.index(old);
                self.cells[idx].revert_state()?;
                self.cells[idx].change_state(CellState::Visited);
            }
        }
        Ok(())
    }

    /// Move the Goal marker to `pos`, reverting the old goal cell.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] outside the grid.
    pub fn set_goal(&mut self, pos: Coord) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(self.oob(pos));
        }
        let previous = self.goal.replace(pos);
        let idx = self.index(pos);
        self.cells[idx].make_goal();
        if let Some(old) = previous {
            if old != pos {
                let idx = self.index(old);
                self.cells[idx].revert_state()?;
            }
        }
        Ok(())
    }

    /// Step the Current marker one cell in `(drow, dcol)`.
    ///
    /// Returns whether the marker moved; steps off the grid or without a
    /// Current marker are no-ops.
    pub fn move_current(&mut self, drow: isize, dcol: isize) -> Result<bool, GridError> {
        let Some(current) = self.current else {
            return Ok(false);
        };
        let row = current.row as isize + drow;
        let col = current.col as isize + dcol;
        if row < 0 || col < 0 {
            return Ok(false);
        }
        let next = Coord::new(row as usize, col as usize);
        if !self.contains(next) {
            return Ok(false);
        }
        self.set_current(next)?;
        Ok(true)
    }

    /// Toggle the cell at `pos` between Active and Inactive.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] outside the grid;
    /// [`GridError::FlipInvalid`] for cells in any other state.
    pub fn flip_active(&mut self, pos: Coord) -> Result<(), GridError> {
        self.at_mut(pos)?.flip_active()
    }

    /// The up-to-4 orthogonally adjacent in-bounds coordinates whose cell
    /// is not Inactive, in fixed right/down/left/up order.
    pub fn neighbors(&self, pos: Coord) -> Vec<Coord> {
        let mut out = Vec::with_capacity(4);
        for (drow, dcol) in DIRECTIONS {
            let row = pos.row as isize + drow;
            let col = pos.col as isize + dcol;
            if row < 0 || col < 0 {
                continue;
            }
            let next = Coord::new(row as usize, col as usize);
            if !self.contains(next) {
                continue;
            }
            if self.cells[self.index(next)].state().passable() {
                out.push(next);
            }
        }
        out
    }

    /// Like [`neighbors`](Self::neighbors), with the order shuffled by the
    /// injected random source. This randomization is what makes the
    /// depth-first search and the obstacle generator produce varied mazes.
    pub fn neighbors_shuffled(&self, pos: Coord, rng: &mut impl Rng) -> Vec<Coord> {
        let mut out = self.neighbors(pos);
        out.shuffle(rng);
        out
    }

    /// Sum of cell costs along an ordered coordinate sequence.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] for coordinates outside the grid;
    /// [`GridError::UndefinedCost`] if the path touches an Inactive or
    /// Visited cell.
    pub fn path_cost(&self, path: &[Coord]) -> Result<u32, GridError> {
        let mut total = 0;
        for &pos in path {
            total += self.at(pos)?.cost()?;
        }
        Ok(total)
    }

    /// Capture the full grid state: dimensions, per-cell states
    /// (column-major) and both markers.
    pub fn snapshot(&self) -> GridSnapshot {
        let cells = (0..self.width)
            .map(|col| {
                (0..self.height)
                    .map(|row| self.cells[col * self.height + row].state())
                    .collect()
            })
            .collect();
        GridSnapshot {
            width: self.width,
            height: self.height,
            cells,
            current: self.current,
            goal: self.goal,
        }
    }

    /// Rebuild a grid from a snapshot.
    ///
    /// Cell states are restored exactly; previous-state slots start empty,
    /// since snapshots capture current state only.
    ///
    /// # Errors
    /// [`GridError::SnapshotShape`] if the cell matrix does not match the
    /// declared dimensions; [`GridError::OutOfBounds`] if a marker lies
    /// outside them.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Self, GridError> {
        snapshot.check_shape()?;
        let mut grid = Self::new(snapshot.width, snapshot.height);
        for (col, column) in snapshot.cells.iter().enumerate() {
            for (row, &state) in column.iter().enumerate() {
                grid.cells[col * snapshot.height + row] = Cell::with_state(state);
            }
        }
        for pos in [snapshot.current, snapshot.goal].into_iter().flatten() {
            if !grid.contains(pos) {
                return Err(grid.oob(pos));
            }
        }
        grid.current = snapshot.current;
        grid.goal = snapshot.goal;
        Ok(grid)
    }
}

impl fmt::Display for GridGraph {
    /// ASCII rendering, one row per line: `.` Active, `#` Inactive,
    /// `~` Slow, `@` Current, `*` Visited, `>` Goal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let ch = match self.cells[col * self.height + row].state() {
                    CellState::Active => '.',
                    CellState::Inactive => '#',
                    CellState::Slow => '~',
                    CellState::Current => '@',
                    CellState::Visited => '*',
                    CellState::Goal => '>',
                };
                write!(f, "{ch}")?;
            }
            if row + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use thiserror::Error;

use crate::ScreenSize;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {rows}x{cols}, both sides must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Size of a [`Grid`], in cells. Neither side is ever zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    /// Dimensions of a terminal window. Note that crossterm reports sizes as `(cols, rows)`.
    pub fn from_terminal(cols: ScreenSize, rows: ScreenSize) -> Result<Self, GridError> {
        Self::new(rows as usize, cols as usize)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Compact stand-in for the full content of a [`Grid`]. Equal grids always have equal
/// fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

/// A bounded field of cells. Cells outside of the field are always dead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,

    /// Row-major cell states, `true` is alive
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![false; dims.area()],
        }
    }

    /// Create a grid with the given cells alive. Cells outside of `dims` are ignored.
    pub fn from_cells<I>(dims: Dimensions, cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(dims);

        for (row, col) in cells {
            grid.set(row, col, true);
        }

        grid
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Whether the cell at `(row, col)` is alive. Anything off the grid is dead.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.dims.contains(row, col) && self.cells[self.index(row, col)]
    }

    /// Set the state of a cell. Returns `false`, and does nothing, if the cell is off the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if !self.dims.contains(row, col) {
            return false;
        }

        let i = self.index(row, col);
        self.cells[i] = alive;

        true
    }

    /// Flip the state of a cell. Cells off the grid are left alone.
    pub fn toggle(&mut self, row: usize, col: usize) {
        if self.dims.contains(row, col) {
            let i = self.index(row, col);
            self.cells[i] = !self.cells[i];
        }
    }

    /// True if no cell is alive
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of every live cell, in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| self.coords(i))
    }

    /// Count the live cells among the 8 neighbors of `(row, col)`.
    pub fn neighbors(&self, row: usize, col: usize) -> u8 {
        let mut n = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                // Stepping off the top or left edge
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };

                if self.get(r, c) {
                    n += 1;
                }
            }
        }

        n
    }

    /// Compute the next generation under Conway's rules.
    pub fn step(&self) -> Grid {
        self.step_with(B3S23)
    }

    /// Compute the next generation under an arbitrary birth/survival rule. The current grid is
    /// left untouched.
    pub fn step_with(&self, rules: RuleSet) -> Grid {
        let cells = (0..self.cells.len())
            .map(|i| {
                let (row, col) = self.coords(i);
                rules.next_state(self.cells[i], self.neighbors(row, col))
            })
            .collect();

        Grid {
            dims: self.dims,
            cells,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);

        Fingerprint(hasher.finish())
    }

    /// Copy the live cells over to a grid of another size, dropping those that don't fit.
    pub fn resized(&self, dims: Dimensions) -> Grid {
        Grid::from_cells(dims, self.live_cells())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dims.cols + col
    }

    fn coords(&self, i: usize) -> (usize, usize) {
        (i / self.dims.cols, i % self.dims.cols)
    }
}

/// One line per row, `O` for live cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for &alive in row {
                f.write_str(if alive { "O" } else { "." })?;
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({})", self.dims)?;
        write!(f, "{self}")
    }
}

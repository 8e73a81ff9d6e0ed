use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::CellOffset;
use crate::grid::Dimensions;
use crate::grid::Grid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("A pattern library needs at least one pattern")]
    EmptyLibrary,

    #[error("Unexpected character '{ch}' at line {line}, column {column}")]
    UnexpectedChar {
        ch: char,
        line: usize,
        column: usize,
    },
}

/// How the cells of a [`Pattern`] map onto a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Cells are shifted so the pattern's bounding box sits in the middle of the grid
    Centered,

    /// Cells are `(row, col)` grid coordinates, used as-is
    Absolute,
}

/// A named set of live cells used to seed a [`Grid`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<(CellOffset, CellOffset)>,
    placement: Placement,
}

impl Pattern {
    /// A centered pattern from `(row, col)` offsets
    pub fn new<I>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = (CellOffset, CellOffset)>,
    {
        Self {
            name: name.into(),
            cells: cells.into_iter().collect(),
            placement: Placement::Centered,
        }
    }

    /// A pattern pinned to the given grid coordinates
    pub fn absolute<I>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = (CellOffset, CellOffset)>,
    {
        Self {
            placement: Placement::Absolute,
            ..Self::new(name, cells)
        }
    }

    /// Parse the plaintext pattern format. Every line is a row, `O` is a live cell and `.` a
    /// dead one. Lines starting with `!` are comments.
    ///
    /// See: https://conwaylife.com/wiki/Plaintext
    pub fn from_plaintext(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut cells = Vec::new();
        let mut row = 0;

        for (line_no, line) in text.lines().enumerate() {
            if line.starts_with('!') {
                continue;
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'O' | 'o' | '*' => cells.push((row, col as CellOffset)),
                    '.' | ' ' => {}
                    ch => {
                        return Err(PatternError::UnexpectedChar {
                            ch,
                            line: line_no + 1,
                            column: col + 1,
                        });
                    }
                }
            }

            row += 1;
        }

        Ok(Self::new(name, cells))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[(CellOffset, CellOffset)] {
        &self.cells
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Cells shifted so that the topmost row and leftmost column are both `0`
    pub fn normalized(&self) -> Vec<(usize, usize)> {
        let Some(min_r) = self.cells.iter().map(|&(r, _)| r).min() else {
            return Vec::new();
        };
        let Some(min_c) = self.cells.iter().map(|&(_, c)| c).min() else {
            return Vec::new();
        };

        self.cells
            .iter()
            .map(|&(r, c)| (r.abs_diff(min_r) as usize, c.abs_diff(min_c) as usize))
            .collect()
    }

    /// `(height, width)` of the pattern's bounding box
    pub fn bounds(&self) -> (usize, usize) {
        let normalized = self.normalized();

        let height = normalized.iter().map(|&(r, _)| r.saturating_add(1)).max().unwrap_or(0);
        let width = normalized.iter().map(|&(_, c)| c.saturating_add(1)).max().unwrap_or(0);

        (height, width)
    }

    /// Lay the pattern onto a fresh grid. Cells that land outside of the grid are dropped.
    pub fn place(&self, dims: Dimensions) -> Grid {
        let grid = match self.placement {
            Placement::Centered => {
                let (height, width) = self.bounds();
                let dr = dims.rows().saturating_sub(height) / 2;
                let dc = dims.cols().saturating_sub(width) / 2;

                Grid::from_cells(
                    dims,
                    self.normalized()
                        .into_iter()
                        .filter_map(|(r, c)| Some((r.checked_add(dr)?, c.checked_add(dc)?))),
                )
            }
            Placement::Absolute => Grid::from_cells(
                dims,
                self.cells.iter().filter_map(|&(r, c)| {
                    Some((usize::try_from(r).ok()?, usize::try_from(c).ok()?))
                }),
            ),
        };

        let clipped = self.clipped(&grid);
        if clipped > 0 {
            debug!("Clipped {clipped} cells of \"{}\" on a {dims} grid", self.name);
        }

        grid
    }

    /// Number of distinct cells of the pattern that didn't make it onto `grid`
    fn clipped(&self, grid: &Grid) -> usize {
        let distinct: HashSet<_> = self.cells.iter().collect();
        distinct.len().saturating_sub(grid.population())
    }
}

const GOSPER_GLIDER_GUN: &str = "\
........................O...........
......................O.O...........
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO..............
OO........O...O.OO....O.O...........
..........O.....O.......O...........
...........O...O....................
............OO......................";

const PULSAR: &str = "\
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..";

const LIGHTWEIGHT_SPACESHIP: &str = "\
.O..O
O....
O...O
OOOO.";

/// An ordered, non-empty collection of patterns with a cursor that cycles through them
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
    cursor: usize,
}

impl PatternLibrary {
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, PatternError> {
        if patterns.is_empty() {
            return Err(PatternError::EmptyLibrary);
        }

        Ok(Self {
            patterns,
            cursor: 0,
        })
    }

    /// The patterns shipped with the program, in the order they are shown
    pub fn builtin() -> Result<Self, PatternError> {
        let acorn = Pattern::new(
            "Acorn",
            [(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
        );

        Self::new(vec![
            Pattern::from_plaintext("Gosper Glider Gun", GOSPER_GLIDER_GUN)?,
            Pattern::from_plaintext("Pulsar", PULSAR)?,
            acorn,
            Pattern::from_plaintext("Lightweight Spaceship", LIGHTWEIGHT_SPACESHIP)?,
        ])
    }

    pub fn current(&self) -> &Pattern {
        &self.patterns[self.cursor]
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Move the cursor forward, wrapping back to the first pattern after the last one
    pub fn next_pattern(&mut self) -> &Pattern {
        self.cursor = (self.cursor + 1) % self.patterns.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false, libraries can't be empty. Only here to go with `len`.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dims(rows: usize, cols: usize) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn plaintext() {
        let pattern = Pattern::from_plaintext("Glider", "!Name: Glider\n.O.\n..O\nOOO\n").unwrap();

        assert_eq!(pattern.cells(), &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(pattern.bounds(), (3, 3));
    }

    #[test]
    fn plaintext_rejects_garbage() {
        let err = Pattern::from_plaintext("Bad", "..O\n.x.").unwrap_err();

        assert_eq!(
            err,
            PatternError::UnexpectedChar {
                ch: 'x',
                line: 2,
                column: 2
            }
        );
    }

    #[test]
    fn normalized_shifts_to_origin() {
        let pattern = Pattern::new("Offset", [(-3, 5), (-2, 7)]);

        assert_eq!(pattern.normalized(), vec![(0, 0), (1, 2)]);
        assert_eq!(pattern.bounds(), (2, 3));
    }

    #[test]
    fn empty_pattern() {
        let pattern = Pattern::new("Nothing", Vec::<(CellOffset, CellOffset)>::new());

        assert!(pattern.normalized().is_empty());
        assert_eq!(pattern.bounds(), (0, 0));
        assert!(pattern.place(dims(5, 5)).is_empty());
    }

    #[test]
    fn centered_placement() {
        let pattern = Pattern::new("Blinker", [(10, 10), (10, 11), (10, 12)]);
        let grid = pattern.place(dims(5, 7));

        insta::assert_snapshot!(grid, @r"
        .......
        .......
        ..OOO..
        .......
        .......
        ");
    }

    #[test]
    fn centered_placement_clips_large_patterns() {
        let pattern = Pattern::new("Line", (0..10).map(|c| (0, c)));
        let grid = pattern.place(dims(1, 4));

        // Too wide to center, so it's pinned to the left edge and cut off
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn far_apart_cells_are_clipped() {
        let pattern = Pattern::new("Wide", [(-2_000_000_000, 0), (2_000_000_000, 0), (0, 0)]);

        assert_eq!(pattern.normalized()[1], (4_000_000_000, 0));
        assert_eq!(pattern.bounds(), (4_000_000_001, 1));

        // Taller than any grid, so it's pinned to the top and only the first cell fits
        let grid = pattern.place(dims(24, 80));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 39)]);
        assert_eq!(pattern.clipped(&grid), 2);
    }

    #[test]
    fn extreme_offsets_do_not_overflow() {
        let pattern = Pattern::new("Corners", [(i32::MIN, i32::MIN), (i32::MAX, i32::MAX)]);
        let grid = pattern.place(dims(3, 3));

        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0)]);
    }

    #[test]
    fn duplicates_are_not_clipped() {
        let pattern = Pattern::new("Twice", [(0, 0), (0, 0), (0, 1)]);
        let grid = pattern.place(dims(3, 3));

        assert_eq!(grid.population(), 2);
        assert_eq!(pattern.clipped(&grid), 0);
    }

    #[test]
    fn absolute_placement() {
        let pattern = Pattern::absolute("Custom", [(0, 0), (2, 3), (-1, 0), (9, 9)]);
        let grid = pattern.place(dims(3, 4));

        assert_eq!(pattern.placement(), Placement::Absolute);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 3)]);
    }

    #[test]
    fn empty_library() {
        assert_eq!(
            PatternLibrary::new(Vec::new()).unwrap_err(),
            PatternError::EmptyLibrary
        );
    }

    #[test]
    fn cursor_wraps() {
        let mut library = PatternLibrary::builtin().unwrap();
        let first = library.current().name().to_owned();

        assert_eq!(library.len(), 4);

        for _ in 0..library.len() - 1 {
            assert_ne!(library.next_pattern().name(), first);
        }

        assert_eq!(library.next_pattern().name(), first);
        assert_eq!(library.index(), 0);
    }

    #[test]
    fn builtin_order_and_sizes() {
        let library = PatternLibrary::builtin().unwrap();
        let summary: Vec<_> = library
            .iter()
            .map(|p| (p.name(), p.cells().len(), p.bounds()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Gosper Glider Gun", 36, (9, 36)),
                ("Pulsar", 48, (13, 13)),
                ("Acorn", 7, (3, 7)),
                ("Lightweight Spaceship", 9, (4, 5)),
            ]
        );
    }
}

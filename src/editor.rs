use crate::CellOffset;
use crate::grid::Dimensions;
use crate::grid::Grid;
use crate::pattern::Pattern;

/// Name given to hand-drawn patterns
pub const CUSTOM_PATTERN: &str = "Custom";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// State of draw mode: the seed being drawn and where the cursor is
#[derive(Debug, Clone)]
pub struct SeedEditor {
    grid: Grid,

    /// `(row, col)`, always on the grid
    cursor: (usize, usize),
}

impl SeedEditor {
    /// An empty canvas with the cursor in the middle
    pub fn new(dims: Dimensions) -> Self {
        Self {
            grid: Grid::new(dims),
            cursor: (dims.rows() / 2, dims.cols() / 2),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Move the cursor one cell over. The cursor stops at the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = self.cursor;
        let dims = self.grid.dimensions();

        self.cursor = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(dims.rows() - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(dims.cols() - 1)),
        };
    }

    /// Flip the cell under the cursor
    pub fn toggle(&mut self) {
        let (row, col) = self.cursor;
        self.grid.toggle(row, col);
    }

    /// Move the drawing to a canvas of a different size. Cells that no longer fit are lost.
    pub fn resize(&mut self, dims: Dimensions) {
        self.grid = self.grid.resized(dims);

        let (row, col) = self.cursor;
        self.cursor = (row.min(dims.rows() - 1), col.min(dims.cols() - 1));
    }

    /// The drawing as a pattern pinned to where it was drawn
    pub fn into_pattern(self) -> Pattern {
        let cells = self
            .grid
            .live_cells()
            .map(|(r, c)| (r as CellOffset, c as CellOffset));

        Pattern::absolute(CUSTOM_PATTERN, cells)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dims(rows: usize, cols: usize) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    #[test]
    fn starts_centered() {
        let editor = SeedEditor::new(dims(24, 80));

        assert_eq!(editor.cursor(), (12, 40));
        assert!(editor.grid().is_empty());
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut editor = SeedEditor::new(dims(2, 3));

        for _ in 0..5 {
            editor.move_cursor(Direction::Up);
            editor.move_cursor(Direction::Left);
        }
        assert_eq!(editor.cursor(), (0, 0));

        for _ in 0..5 {
            editor.move_cursor(Direction::Down);
            editor.move_cursor(Direction::Right);
        }
        assert_eq!(editor.cursor(), (1, 2));
    }

    #[test]
    fn draw_a_glider() {
        let mut editor = SeedEditor::new(dims(5, 5));

        // cursor starts at (2, 2)
        editor.move_cursor(Direction::Up);
        editor.toggle();
        editor.move_cursor(Direction::Down);
        editor.move_cursor(Direction::Right);
        editor.toggle();
        editor.move_cursor(Direction::Down);
        editor.toggle();
        editor.move_cursor(Direction::Left);
        editor.toggle();
        editor.move_cursor(Direction::Left);
        editor.toggle();

        insta::assert_snapshot!(editor.grid(), @r"
        .....
        ..O..
        ...O.
        .OOO.
        .....
        ");

        let pattern = editor.into_pattern();
        assert_eq!(pattern.name(), CUSTOM_PATTERN);
        assert_eq!(pattern.cells(), &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn toggle_twice_clears() {
        let mut editor = SeedEditor::new(dims(3, 3));

        editor.toggle();
        editor.toggle();

        assert!(editor.grid().is_empty());
    }

    #[test]
    fn resize_clamps_cursor() {
        let mut editor = SeedEditor::new(dims(10, 10));

        editor.toggle();
        editor.resize(dims(4, 4));

        assert_eq!(editor.cursor(), (3, 3));
        assert!(editor.grid().is_empty());
    }
}

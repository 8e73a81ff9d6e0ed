use crate::config::DEAD_CELL;
use crate::config::LIVE_CELL;
use crate::grid::Grid;

/// Turns grids into text frames, one character per cell.
pub struct Screen {
    /// The frame buffer. Reused from one frame to the next.
    fb: String,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self { fb: String::new() }
    }

    /// Render `grid` as one line per row, separated by `\n`. Every line is exactly as wide as
    /// the grid, so it fully overwrites whatever was drawn before it.
    pub fn render(&mut self, grid: &Grid) -> &str {
        self.fb.clear();

        // Both glyphs are single byte
        self.fb.reserve(grid.rows() * (grid.cols() + 1));

        for row in 0..grid.rows() {
            if row > 0 {
                self.fb.push('\n');
            }

            for col in 0..grid.cols() {
                let glyph = if grid.get(row, col) { LIVE_CELL } else { DEAD_CELL };
                self.fb.push(glyph);
            }
        }

        &self.fb
    }
}

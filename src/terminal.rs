use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;

use lifecycle::ScreenSize;

/// Raw mode on the alternate screen. Everything is put back the way it was on drop, including
/// when setting up only got halfway.
pub struct Terminal<W: Write = Stdout> {
    writer: W,
    raw_mode: bool,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        let mut term = Self {
            writer: io::stdout(),
            raw_mode: false,
        };

        terminal::enable_raw_mode()?;
        term.raw_mode = true;
        term.setup()?;

        Ok(term)
    }
}

impl<W: Write> Terminal<W> {
    fn setup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
        )
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, terminal::Clear(terminal::ClearType::All))
    }

    /// Draw a frame line by line from the top left corner, then park the cursor.
    pub fn draw(&mut self, frame: &str, cursor: Option<(usize, usize)>) -> io::Result<()> {
        for (row, line) in frame.lines().enumerate() {
            queue!(
                self.writer,
                cursor::MoveTo(0, row as ScreenSize),
                style::Print(line)
            )?;
        }

        match cursor {
            Some((row, col)) => queue!(
                self.writer,
                cursor::MoveTo(col as ScreenSize, row as ScreenSize),
                cursor::Show
            )?,
            None => queue!(self.writer, cursor::Hide)?,
        }

        self.writer.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        // Nothing left to report errors to at this point
        let _ = execute!(self.writer, cursor::Show, terminal::LeaveAlternateScreen);

        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

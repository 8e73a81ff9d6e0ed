use crate::ScreenSize;
use crate::editor::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AppEvent(AppEvent),
    DrawEvent(DrawEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application
    Exit,

    /// Skip to the next pattern of the library
    NextPattern,

    /// The terminal changed size
    Resize { cols: ScreenSize, rows: ScreenSize },
}

/// Only meaningful while the seed is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEvent {
    Move(Direction),

    /// Flip the cell under the cursor
    Toggle,

    /// Done drawing, run the drawn seed
    Start,
}

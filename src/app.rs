use tracing::info;
use tracing::warn;

use crate::editor::SeedEditor;
use crate::engine::Engine;
use crate::engine::Tick;
use crate::events::AppEvent;
use crate::events::DrawEvent;
use crate::events::Event;
use crate::grid::Dimensions;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The user is drawing a seed, the engine is paused
    Draw,

    /// The engine runs
    Simulate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Everything the frame loop needs, minus the terminal itself
pub struct App {
    engine: Engine,

    /// `Some` while in draw mode
    editor: Option<SeedEditor>,
}

impl App {
    pub fn new(engine: Engine, mode: Mode) -> Self {
        let editor = match mode {
            Mode::Draw => Some(SeedEditor::new(engine.dimensions())),
            Mode::Simulate => None,
        };

        Self { engine, editor }
    }

    pub fn mode(&self) -> Mode {
        match self.editor {
            Some(_) => Mode::Draw,
            None => Mode::Simulate,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The grid to show right now
    pub fn grid(&self) -> &Grid {
        match &self.editor {
            Some(editor) => editor.grid(),
            None => self.engine.grid(),
        }
    }

    /// Where to put the terminal cursor, if it should be shown at all
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.editor.as_ref().map(SeedEditor::cursor)
    }

    pub fn handle(&mut self, event: Event) -> Control {
        match event {
            Event::AppEvent(AppEvent::Exit) => return Control::Exit,
            Event::AppEvent(AppEvent::NextPattern) => {
                if self.editor.take().is_some() {
                    info!("Drawing abandoned, starting \"{}\"", self.engine.seed_name());
                } else {
                    self.engine.next_pattern();
                }
            }
            Event::AppEvent(AppEvent::Resize { cols, rows }) => {
                let Ok(dims) = Dimensions::from_terminal(cols, rows) else {
                    warn!("Ignoring resize to {cols}x{rows}");
                    return Control::Continue;
                };

                if let Some(editor) = &mut self.editor {
                    editor.resize(dims);
                }

                self.engine.resize(dims);
            }
            Event::DrawEvent(event) => self.handle_draw(event),
        }

        Control::Continue
    }

    /// Advance the simulation by a frame. Does nothing while drawing.
    pub fn update(&mut self) -> Option<Tick> {
        if self.editor.is_some() {
            return None;
        }

        Some(self.engine.tick())
    }

    fn handle_draw(&mut self, event: DrawEvent) {
        if let DrawEvent::Start = event {
            if let Some(editor) = self.editor.take() {
                self.engine.load(editor.into_pattern());
            }

            return;
        }

        let Some(editor) = &mut self.editor else {
            return;
        };

        match event {
            DrawEvent::Move(direction) => editor.move_cursor(direction),
            DrawEvent::Toggle => editor.toggle(),
            DrawEvent::Start => {}
        }
    }
}

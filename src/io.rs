use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::editor::Direction;
use crate::events::AppEvent;
use crate::events::DrawEvent;
use crate::events::Event;

/// Converts a crossterm event into a lifecycle event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        // Windows reports key releases as well
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Resize(cols, rows) => Some(Event::AppEvent(AppEvent::Resize { cols, rows })),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q' | 'Q') | KeyCode::Esc,
            ..
        } => Event::AppEvent(AppEvent::Exit),
        KeyEvent {
            code: KeyCode::Char('n' | 'N'),
            ..
        } => Event::AppEvent(AppEvent::NextPattern),
        KeyEvent {
            code: KeyCode::Up | KeyCode::Char('k'),
            ..
        } => Event::DrawEvent(DrawEvent::Move(Direction::Up)),
        KeyEvent {
            code: KeyCode::Down | KeyCode::Char('j'),
            ..
        } => Event::DrawEvent(DrawEvent::Move(Direction::Down)),
        KeyEvent {
            code: KeyCode::Left | KeyCode::Char('h'),
            ..
        } => Event::DrawEvent(DrawEvent::Move(Direction::Left)),
        KeyEvent {
            code: KeyCode::Right | KeyCode::Char('l'),
            ..
        } => Event::DrawEvent(DrawEvent::Move(Direction::Right)),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Event::DrawEvent(DrawEvent::Toggle),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => Event::DrawEvent(DrawEvent::Start),
        _ => return None,
    };

    Some(event)
}

use std::io::IsTerminal;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::event;
use tracing::info;

use lifecycle::app::App;
use lifecycle::app::Control;
use lifecycle::app::Mode;
use lifecycle::config::Args;
use lifecycle::config::DRAW_FRAMETIME;
use lifecycle::config::FRAMETIME;
use lifecycle::config::log_filter;
use lifecycle::engine::Engine;
use lifecycle::events::AppEvent;
use lifecycle::events::Event;
use lifecycle::grid::Dimensions;
use lifecycle::io::convert_event;
use lifecycle::pattern::PatternLibrary;
use lifecycle::render::Screen;

use terminal::Terminal;

mod terminal;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs only when stderr is redirected, e.g. `lifecycle 2> life.log`
    if let Some(filter) = log_filter(std::io::stderr().is_terminal()) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }

    let (cols, rows) = crossterm::terminal::size().context("Failed to get the terminal size")?;
    let dims = Dimensions::from_terminal(cols, rows).context("Terminal is too small")?;
    let library = PatternLibrary::builtin().context("Failed to load the built-in patterns")?;

    let mode = if args.draw { Mode::Draw } else { Mode::Simulate };
    let mut app = App::new(Engine::new(dims, library), mode);

    info!(
        "Starting on a {dims} grid in {mode:?} mode with {} patterns",
        app.engine().library().len()
    );

    let mut term = Terminal::enter().context("Failed to set up the terminal")?;
    run(&mut app, &mut term)
}

fn run(app: &mut App, term: &mut Terminal) -> anyhow::Result<()> {
    let mut screen = Screen::new();

    loop {
        let t = Instant::now();

        term.draw(screen.render(app.grid()), app.cursor())?;

        let frametime = match app.mode() {
            Mode::Draw => DRAW_FRAMETIME,
            Mode::Simulate => FRAMETIME,
        };

        // Poll events for as long as a frame lasts
        let event = if event::poll(frametime)? {
            convert_event(event::read()?)
        } else {
            None
        };

        if let Some(event) = event {
            if let Event::AppEvent(AppEvent::Resize { .. }) = event {
                term.clear()?;
            }

            if app.handle(event) == Control::Exit {
                break;
            }

            // Keep the pace steady when keys come in mid-frame
            if app.mode() == Mode::Simulate {
                std::thread::sleep(frametime.saturating_sub(t.elapsed()));
            } else {
                // Redraw right away so the cursor keeps up with the keyboard
                continue;
            }
        }

        app.update();
    }

    Ok(())
}

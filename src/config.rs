use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Time between two generations
pub const FRAMETIME: Duration = Duration::from_millis(50);

/// How often to redraw while the seed is being drawn and nothing else is going on
pub const DRAW_FRAMETIME: Duration = Duration::from_millis(250);

pub const LIVE_CELL: char = 'O';
pub const DEAD_CELL: char = ' ';

/// Log filter for stderr, `warn` unless `RUST_LOG` says otherwise.
///
/// Stderr shares the screen with the frames when it isn't redirected, so nothing is logged then.
pub fn log_filter(stderr_is_terminal: bool) -> Option<EnvFilter> {
    if stderr_is_terminal {
        return None;
    }

    Some(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
}

/// Conway's Game of Life in the terminal. Patterns run until they die out or settle into a
/// repeating state, then the next one starts.
///
/// Keys: `q` quits, `n` skips to the next pattern. While drawing, arrows or `hjkl` move the
/// cursor, space toggles a cell and enter starts the simulation.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Draw the starting pattern by hand before the simulation begins
    #[arg(short, long)]
    pub draw: bool,
}

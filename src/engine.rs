use std::collections::HashMap;
use std::fmt;

use tracing::debug;
use tracing::info;

use crate::grid::Dimensions;
use crate::grid::Fingerprint;
use crate::grid::Grid;
use crate::pattern::Pattern;
use crate::pattern::PatternLibrary;

/// Why a simulation stopped making progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Every cell is dead
    Extinct,

    /// The grid did not change from one generation to the next
    StillLife,

    /// The grid came back to a state it was in `period` generations ago
    Oscillator { period: u64 },
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Extinct => f.write_str("extinct"),
            Termination::StillLife => f.write_str("still life"),
            Termination::Oscillator { period } => write!(f, "oscillator (period {period})"),
        }
    }
}

/// Every grid state seen since the current seed was loaded, with the generation it first
/// appeared at.
#[derive(Debug, Default, Clone)]
pub struct History {
    seen: HashMap<Fingerprint, u64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `fingerprint` as seen at `generation`. A fingerprint seen before keeps its
    /// original generation.
    pub fn record(&mut self, fingerprint: Fingerprint, generation: u64) {
        self.seen.entry(fingerprint).or_insert(generation);
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.seen.contains_key(&fingerprint)
    }

    pub fn first_seen(&self, fingerprint: Fingerprint) -> Option<u64> {
        self.seen.get(&fingerprint).copied()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// True if `grid` is dead or has already been seen
pub fn is_terminal(grid: &Grid, history: &History) -> bool {
    grid.is_empty() || history.contains(grid.fingerprint())
}

/// What a call to [`Engine::tick`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// The grid moved on to `generation`
    Advanced { generation: u64 },

    /// The seed `finished` ended for `reason` and `next` was loaded in its place
    Switched {
        finished: String,
        reason: Termination,
        next: String,
    },
}

/// Where the running seed came from
#[derive(Debug, Clone)]
enum Seed {
    /// The library's current pattern
    Library,

    /// A pattern handed in from outside, typically drawn by the user
    Custom(Pattern),
}

/// Runs one seed at a time, and moves on to the next pattern of its library once the current one
/// dies out or starts repeating itself.
pub struct Engine {
    library: PatternLibrary,
    seed: Seed,

    dims: Dimensions,
    grid: Grid,
    history: History,
    generation: u64,
}

impl Engine {
    /// Create an engine running the library's current pattern
    pub fn new(dims: Dimensions, library: PatternLibrary) -> Self {
        let mut engine = Self {
            library,
            seed: Seed::Library,
            dims,
            grid: Grid::new(dims),
            history: History::new(),
            generation: 0,
        };

        engine.reseed();

        engine
    }

    /// Lay `pattern` onto an empty grid of the given size and start over from generation `0`.
    pub fn initialize(&mut self, dims: Dimensions, pattern: &Pattern) -> &Grid {
        self.dims = dims;
        self.grid = pattern.place(dims);
        self.history.clear();
        self.generation = 0;

        debug!(
            "Seeded \"{}\" on a {dims} grid, {} live cells",
            pattern.name(),
            self.grid.population()
        );

        &self.grid
    }

    /// Run a pattern that isn't part of the library. Once it ends, the library's current pattern
    /// takes over.
    pub fn load(&mut self, pattern: Pattern) -> &Grid {
        info!("Loading custom pattern \"{}\"", pattern.name());

        self.seed = Seed::Custom(pattern);
        self.reseed()
    }

    /// Switch to the next pattern. Coming from a custom seed, this is the library's current
    /// pattern rather than the one after it.
    pub fn next_pattern(&mut self) -> &Pattern {
        if matches!(self.seed, Seed::Custom(_)) {
            self.seed = Seed::Library;
        } else {
            self.library.next_pattern();
        }

        self.reseed();
        self.library.current()
    }

    /// Start the current seed over on a grid of a different size
    pub fn resize(&mut self, dims: Dimensions) -> &Grid {
        debug!("Resizing from {} to {dims}", self.dims);

        self.dims = dims;
        self.reseed()
    }

    /// Why the current grid is terminal, if it is
    pub fn termination(&self) -> Option<Termination> {
        if self.grid.is_empty() {
            return Some(Termination::Extinct);
        }

        let first_seen = self.history.first_seen(self.grid.fingerprint())?;

        match self.generation - first_seen {
            1 => Some(Termination::StillLife),
            period => Some(Termination::Oscillator { period }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(&self.grid, &self.history)
    }

    /// Advance the simulation by one generation, or move on to the next seed if the current one
    /// has ended.
    pub fn tick(&mut self) -> Tick {
        if let Some(reason) = self.termination() {
            let finished = self.seed_name().to_owned();
            self.next_pattern();
            let next = self.seed_name().to_owned();

            info!(
                "\"{finished}\" ended as {reason} after {} generations, switching to \"{next}\"",
                self.generation
            );

            return Tick::Switched {
                finished,
                reason,
                next,
            };
        }

        self.history.record(self.grid.fingerprint(), self.generation);
        self.grid = self.grid.step();
        self.generation += 1;

        Tick::Advanced {
            generation: self.generation,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Name of the pattern currently running
    pub fn seed_name(&self) -> &str {
        match &self.seed {
            Seed::Library => self.library.current().name(),
            Seed::Custom(pattern) => pattern.name(),
        }
    }

    fn reseed(&mut self) -> &Grid {
        let pattern = match &self.seed {
            Seed::Library => self.library.current().clone(),
            Seed::Custom(pattern) => pattern.clone(),
        };

        self.initialize(self.dims, &pattern)
    }
}

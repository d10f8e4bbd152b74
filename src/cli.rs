//! CLI plumbing: logging setup, error type and the play command.

use std::error::Error;
use std::fmt;
use std::io;

use tracing::{info, level_filters::LevelFilter};
use war::console::{self, InputReader, Session};
use war::game::{Registry, resolve_capacity};
use war::{AllocationError, OutputFormat, RandomDice, SessionConfig};

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<AllocationError> for CliError {
    fn from(e: AllocationError) -> Self {
        Self::new(e.to_string())
    }
}

/// Install a stderr log subscriber; stdout belongs to the game.
pub(crate) fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run one interactive session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the registry cannot be allocated or the console fails.
pub(crate) fn play(
    capacity: Option<i64>,
    seed: Option<u64>,
    format: OutputFormat,
    pause: bool,
) -> Result<(), CliError> {
    let mut input = InputReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    let capacity = match capacity {
        Some(requested) => resolve_capacity(Some(requested)),
        None => console::prompt_capacity(&mut input, &mut out)?,
    };
    let registry = Registry::allocate(capacity)?;

    let dice = match seed {
        Some(seed) => {
            info!(seed, "dice seeded");
            RandomDice::seeded(seed)
        }
        None => RandomDice::from_entropy(),
    };

    let config = SessionConfig { format, pause };
    Session::new(registry, input, out, dice, config).run()?;
    Ok(())
}

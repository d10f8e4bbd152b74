//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::console::input::{parse_id, parse_int, InputReader};
use crate::console::render;
use crate::error::{AttackError, RegistrationError};
use crate::game::{attack, resolve_capacity, Dice, Registry};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for the next option.
    Running,
    /// The player chose to exit (or input ended).
    Exiting,
}

/// An option picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `0`
    Exit,
    /// `1`
    Register,
    /// `2`
    List,
    /// `3`
    Attack,
    /// Anything else, including non-numeric input.
    Unknown,
}

impl MenuChoice {
    /// Interpret one line typed at the menu prompt.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match parse_int(text) {
            Some(0) => Self::Exit,
            Some(1) => Self::Register,
            Some(2) => Self::List,
            Some(3) => Self::Attack,
            _ => Self::Unknown,
        }
    }
}

/// Ask for the registry capacity, falling back to the default on bad input.
///
/// # Errors
///
/// Returns any I/O error from the console.
pub fn prompt_capacity<R: BufRead, W: Write>(
    input: &mut InputReader<R>,
    out: &mut W,
) -> io::Result<usize> {
    render::prompt(out, "Enter the maximum number of territories: ")?;
    let line = input.read_line()?;
    Ok(resolve_capacity(line.as_deref().and_then(parse_int)))
}

/// One interactive game: a registry, a console and a pair of dice.
#[derive(Debug)]
pub struct Session<R, W, D> {
    registry: Registry,
    input: InputReader<R>,
    out: W,
    dice: D,
    config: SessionConfig,
}

impl<R: BufRead, W: Write, D: Dice> Session<R, W, D> {
    /// Create a session over an allocated registry.
    #[must_use]
    pub const fn new(
        registry: Registry,
        input: InputReader<R>,
        out: W,
        dice: D,
        config: SessionConfig,
    ) -> Self {
        Self {
            registry,
            input,
            out,
            dice,
            config,
        }
    }

    /// The territories registered so far.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the session, returning the output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu until the player exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the console.
    pub fn run(&mut self) -> io::Result<()> {
        info!(capacity = self.registry.capacity(), "session started");
        while self.step()? == MenuState::Running {}
        info!(territories = self.registry.len(), "session ended");
        Ok(())
    }

    /// Show the menu, read one option and carry it out.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the console.
    pub fn step(&mut self) -> io::Result<MenuState> {
        render::menu(&mut self.out)?;
        let Some(line) = self.input.read_line()? else {
            writeln!(self.out)?;
            return self.exit();
        };

        let choice = MenuChoice::parse(&line);
        debug!(?choice, "menu option");
        match choice {
            MenuChoice::Exit => self.exit(),
            MenuChoice::Register => self.register(),
            MenuChoice::List => self.list(),
            MenuChoice::Attack => self.attack(),
            MenuChoice::Unknown => {
                writeln!(self.out, "INVALID OPTION.")?;
                writeln!(self.out, "PLEASE TRY AGAIN.")?;
                self.pause()
            }
        }
    }

    fn exit(&mut self) -> io::Result<MenuState> {
        writeln!(self.out, "Exiting...")?;
        Ok(MenuState::Exiting)
    }

    fn register(&mut self) -> io::Result<MenuState> {
        render::heading(&mut self.out, "Register a Territory")?;
        if self.registry.is_full() {
            let full = RegistrationError::Full {
                capacity: self.registry.capacity(),
            };
            render::error(&mut self.out, full)?;
            return Ok(MenuState::Running);
        }

        let Some(color) = self.ask("Enter the army color (e.g. Blue): ")? else {
            return self.exit();
        };
        let Some(name) = self.ask("Enter the territory name (e.g. Brazil): ")? else {
            return self.exit();
        };
        let Some(troops) = self.ask("Enter the number of troops: ")? else {
            return self.exit();
        };

        let Some(troops) = parse_int(&troops) else {
            render::error(&mut self.out, "troop count must be a whole number")?;
            return Ok(MenuState::Running);
        };
        match self.registry.register(&name, &color, troops) {
            Ok(_) => render::notice(&mut self.out, "Territory registered successfully!")?,
            Err(e) => render::error(&mut self.out, e)?,
        }
        Ok(MenuState::Running)
    }

    fn list(&mut self) -> io::Result<MenuState> {
        render::heading(&mut self.out, "Territories")?;
        render::territories(&mut self.out, self.registry.list(), self.config.format)?;
        self.pause()
    }

    fn attack(&mut self) -> io::Result<MenuState> {
        render::heading(&mut self.out, "Attack")?;
        let registered = self.registry.len();
        if registered < 2 {
            render::error(&mut self.out, AttackError::NotEnoughTerritories { registered })?;
            return Ok(MenuState::Running);
        }

        let Some(from) = self.ask("Attacking territory id: ")? else {
            return self.exit();
        };
        let Some(to) = self.ask("Defending territory id: ")? else {
            return self.exit();
        };
        let (Some(from), Some(to)) = (parse_id(&from), parse_id(&to)) else {
            render::error(
                &mut self.out,
                format!("invalid territory id (valid ids: 1-{registered})"),
            )?;
            return Ok(MenuState::Running);
        };

        match attack(&mut self.registry, from, to, &mut self.dice) {
            Ok(outcome) => render::combat(&mut self.out, &outcome, self.config.format)?,
            Err(e) => render::error(&mut self.out, e)?,
        }
        Ok(MenuState::Running)
    }

    /// Prompt and read one line; `None` means input ended.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        render::prompt(&mut self.out, prompt)?;
        self.input.read_line()
    }

    fn pause(&mut self) -> io::Result<MenuState> {
        if !self.config.pause {
            return Ok(MenuState::Running);
        }
        writeln!(self.out)?;
        render::prompt(&mut self.out, "Press Enter to continue\n")?;
        match self.input.read_line()? {
            Some(_) => Ok(MenuState::Running),
            None => self.exit(),
        }
    }
}

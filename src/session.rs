#![cfg(feature = "std")]

//! The input → engine → render loop that sits between a terminal (or any
//! other command source) and a [`GameEngine`].

use crate::{
    cli::{parse_command, Command, HELP_TEXT},
    common::GameStatus,
    game::GameEngine,
    ui,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Anything that can hand the session its next command.
pub trait InputSource {
    /// Next command, or `None` once the source is exhausted.
    fn next_command(&mut self, engine: &GameEngine) -> anyhow::Result<Option<Command>>;
}

/// Reads one command per line. Blank lines are skipped.
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_command(&mut self, _engine: &GameEngine) -> anyhow::Result<Option<Command>> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(
                parse_command(&line).unwrap_or_else(Command::Unrecognized),
            ));
        }
    }
}

/// Plays a uniformly random legal move for whichever side is to move, and
/// quits once the game is over. Drives unattended playouts.
pub struct RandomMover {
    rng: SmallRng,
}

impl RandomMover {
    /// Fixed seed for reproducible playouts.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self {
            rng: SmallRng::from_rng(&mut seed_rng),
        }
    }

    /// A random legal move for the side to move, if there is one.
    pub fn pick(&mut self, engine: &GameEngine) -> Option<(usize, usize)> {
        let moves = engine.valid_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.random_range(0..moves.len())])
    }
}

impl InputSource for RandomMover {
    fn next_command(&mut self, engine: &GameEngine) -> anyhow::Result<Option<Command>> {
        Ok(Some(match self.pick(engine) {
            Some((row, col)) => Command::Move { row, col },
            None => Command::Quit,
        }))
    }
}

/// One sitting at the board: an engine, where commands come from and
/// where the rendered view goes.
pub struct Session<I: InputSource, W: Write> {
    engine: GameEngine,
    input: I,
    out: W,
    hints: bool,
    rejected: usize,
}

impl<I: InputSource, W: Write> Session<I, W> {
    pub fn new(engine: GameEngine, input: I, out: W) -> Self {
        Self {
            engine,
            input,
            out,
            hints: true,
            rejected: 0,
        }
    }

    /// Start with legal-move markers on or off.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    /// Number of commands the engine turned down.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let hints = self.hints && self.engine.status() == GameStatus::InProgress;
        writeln!(self.out, "\n{}", ui::render_board(&self.engine, hints))?;
        writeln!(self.out, "{}", ui::render_status(&self.engine))?;
        if let Some(text) = ui::render_game_over(&self.engine) {
            writeln!(self.out, "\n{}", text)?;
            writeln!(self.out, "Type 'reset' to play again or 'quit' to leave.")?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        match self.engine.status() {
            GameStatus::InProgress => {
                write!(self.out, "{} to move > ", self.engine.current_player())?
            }
            GameStatus::Over => write!(self.out, "> ")?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Run until the input quits or runs dry. Invalid moves are reported
    /// and otherwise ignored. Returns the status the game was left in.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        self.render()?;
        loop {
            self.prompt()?;
            let Some(command) = self.input.next_command(&self.engine)? else {
                writeln!(self.out)?;
                break;
            };
            match command {
                Command::Move { row, col } => {
                    let mover = self.engine.current_player();
                    match self.engine.submit_move(row, col) {
                        Ok(()) => {
                            writeln!(self.out, "{} played {}", mover, ui::coord_to_string(row, col))?;
                            self.render()?;
                        }
                        Err(e) => {
                            self.rejected += 1;
                            log::debug!("rejected move ({}, {}): {}", row, col, e);
                            writeln!(self.out, "Invalid move: {}", e)?;
                            let legal: Vec<String> = self
                                .engine
                                .valid_moves()
                                .into_iter()
                                .map(|(r, c)| ui::coord_to_string(r, c))
                                .collect();
                            if !legal.is_empty() {
                                writeln!(self.out, "Legal moves: {}", legal.join(", "))?;
                            }
                        }
                    }
                }
                Command::Reset => {
                    self.engine.reset();
                    writeln!(self.out, "New game.")?;
                    self.render()?;
                }
                Command::Hints => {
                    self.hints = !self.hints;
                    writeln!(self.out, "Hints {}.", if self.hints { "on" } else { "off" })?;
                    self.render()?;
                }
                Command::Help => writeln!(self.out, "{}", HELP_TEXT)?,
                Command::Quit => break,
                Command::Unrecognized(reason) => {
                    writeln!(self.out, "Unrecognized input: {}", reason)?
                }
            }
        }
        Ok(self.engine.status())
    }
}

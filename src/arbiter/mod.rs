//! Line protocol spoken with the match referee.
//!
//! The referee starts one process per seat and relays moves between them,
//! one token per line ("3R", "15TB"). The first player receives `START`.
//! A player ends the game by printing `RESULT <reason-or-move> <s1> <s2>`.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::board::{Bot, GameState, Move, MoveParseError, Seat};

pub mod command;
pub mod options;

pub use command::{parse_command, Command};
pub use options::PlayerOptions;

/// Error type for the player process
#[derive(Debug)]
pub enum ArbiterError {
    /// Reading from the referee or writing to it failed
    Io(io::Error),
    /// A configuration value could not be parsed
    InvalidOption { name: &'static str, value: String },
}

impl fmt::Display for ArbiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArbiterError::Io(e) => write!(f, "I/O error: {e}"),
            ArbiterError::InvalidOption { name, value } => {
                write!(f, "Invalid value '{value}' for {name}")
            }
        }
    }
}

impl std::error::Error for ArbiterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArbiterError::Io(e) => Some(e),
            ArbiterError::InvalidOption { .. } => None,
        }
    }
}

impl From<io::Error> for ArbiterError {
    fn from(e: io::Error) -> Self {
        ArbiterError::Io(e)
    }
}

/// What to send back for one referee line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to print, in order
    pub lines: Vec<String>,
    /// The game is over for this process
    pub finished: bool,
}

impl Reply {
    fn silent() -> Self {
        Reply::default()
    }

    fn line(line: String) -> Self {
        Reply {
            lines: vec![line],
            finished: false,
        }
    }

    fn finish(line: String) -> Self {
        Reply {
            lines: vec![line],
            finished: true,
        }
    }

    fn stop() -> Self {
        Reply {
            lines: Vec::new(),
            finished: true,
        }
    }
}

/// One side of a refereed match.
///
/// Tracks the game locally from both players' moves and answers with the
/// bot's choice. The seat comes from the options or, failing that, from the
/// protocol: `START` means we move first, an opponent move means second.
pub struct Player {
    state: GameState,
    options: PlayerOptions,
    seat: Option<Seat>,
    bot: Option<Bot>,
}

impl Player {
    #[must_use]
    pub fn new(options: PlayerOptions) -> Self {
        Player {
            state: GameState::new(),
            seat: options.seat,
            options,
            bot: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seat we play, once known.
    #[must_use]
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }

    /// Process one referee line. No I/O besides the score file.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(cmd) = parse_command(line) else {
            return Reply::silent();
        };
        log::debug!("received {cmd:?}");

        match cmd {
            Command::Start => self.play_own_move(Seat::First),
            Command::Move(token) => self.on_opponent_move(&token),
            Command::Result(text) => {
                log::info!("game over: {text}");
                Reply::stop()
            }
            Command::Unknown(text) => {
                log::warn!("ignoring unknown line '{text}'");
                Reply::silent()
            }
        }
    }

    fn on_opponent_move(&mut self, token: &str) -> Reply {
        if let Err(e) = self.apply_token(token) {
            // Continuing would desynchronise us from the referee.
            log::warn!("opponent move rejected: {e}");
            return Reply::finish(format!("RESULT INVALID_OPP_MOVE {}", self.scores_text()));
        }
        self.save_scores();

        let status = self.state.status();
        if status.is_over() {
            log::info!("game over after opponent move: {status}");
            return Reply::finish(format!("RESULT {token} {}", self.scores_text()));
        }

        self.play_own_move(Seat::Second)
    }

    fn apply_token(&mut self, token: &str) -> Result<(), MoveParseError> {
        let mv = self.state.parse_move(token)?;
        self.state
            .apply_move(mv)
            .map_err(|reason| MoveParseError::Illegal {
                notation: token.to_string(),
                reason,
            })?;
        Ok(())
    }

    /// Search and play our move. `default_seat` applies if the seat is unknown.
    fn play_own_move(&mut self, default_seat: Seat) -> Reply {
        let seat = *self.seat.get_or_insert(default_seat);
        let mut config = self.options.search;
        config.seat = seat;
        let seed = self.options.seed;
        let bot = self.bot.get_or_insert_with(|| match seed {
            Some(seed) => Bot::with_seed(config, seed),
            None => Bot::new(config),
        });

        let choice = bot.choose_move(&self.state);
        let Some(mv) = pick_safe_move(&self.state, choice) else {
            log::info!("no legal move for {seat}");
            return Reply::finish(format!("RESULT BLOCKED {}", self.scores_text()));
        };

        if let Err(e) = self.state.apply_move(mv) {
            log::error!("own move {mv} rejected: {e}");
            return Reply::finish(format!("RESULT COUP_INVALIDE {}", self.scores_text()));
        }
        self.save_scores();

        let status = self.state.status();
        if status.is_over() {
            log::info!("game over after our move {mv}: {status}");
            Reply::finish(format!("RESULT {mv} {}", self.scores_text()))
        } else {
            log::debug!("played {mv}");
            Reply::line(mv.to_string())
        }
    }

    fn scores_text(&self) -> String {
        let [s1, s2] = self.state.scores();
        format!("{s1} {s2}")
    }

    fn save_scores(&self) {
        if let Some(path) = &self.options.score_file {
            if let Err(e) = write_scores(path, &self.state) {
                log::warn!("could not write scores to {}: {e}", path.display());
            }
        }
    }
}

/// Keep `preferred` if it is legal, else the first legal Red/Blue move,
/// else any legal move.
#[must_use]
pub fn pick_safe_move(state: &GameState, preferred: Option<Move>) -> Option<Move> {
    let legal = state.generate_moves();
    if let Some(mv) = preferred.filter(|&mv| legal.contains(mv)) {
        return Some(mv);
    }
    if let Some(mv) = preferred {
        log::warn!("search returned illegal move {mv}, falling back");
    }
    legal
        .iter()
        .find(|mv| !mv.selector().is_transparent())
        .copied()
        .or_else(|| legal.first())
}

/// Overwrite `path` with "s1 s2".
pub fn write_scores(path: &Path, state: &GameState) -> io::Result<()> {
    let [s1, s2] = state.scores();
    fs::write(path, format!("{s1} {s2}"))
}

/// Drive `player` from `input` until the game ends or input closes.
///
/// Output is flushed after every reply so the referee never waits on a
/// buffered move.
pub fn run_player_loop<R, W>(player: &mut Player, input: R, mut output: W) -> Result<(), ArbiterError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let reply = player.handle_line(&line);
        for out in &reply.lines {
            writeln!(output, "{out}")?;
        }
        output.flush()?;
        if reply.finished {
            break;
        }
    }
    Ok(())
}

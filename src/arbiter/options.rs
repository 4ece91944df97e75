use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::ArbiterError;
use crate::board::{SearchConfig, Seat};

pub const FIRST_SEAT_ARG: &str = "Joueur1";
pub const SECOND_SEAT_ARG: &str = "Joueur2";

pub const ENV_DEBUG: &str = "AWALE_DEBUG";
pub const ENV_TIME_MS: &str = "AWALE_TIME_MS";
pub const ENV_DEPTH: &str = "AWALE_DEPTH";
pub const ENV_SCORE_FILE: &str = "AWALE_SCORE_FILE";
pub const ENV_SEED: &str = "AWALE_SEED";

/// Settings for one match player process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Seat given on the command line; `None` means resolve from the protocol
    pub seat: Option<Seat>,
    /// Depth cap and time budget. The seat field is overwritten once known.
    pub search: SearchConfig,
    /// File rewritten with "s1 s2" after every applied move
    pub score_file: Option<PathBuf>,
    /// Fixed shuffling seed for reproducible games
    pub seed: Option<u64>,
    pub debug: bool,
}

impl PlayerOptions {
    #[must_use]
    pub fn new() -> Self {
        PlayerOptions {
            seat: None,
            search: SearchConfig::default(),
            score_file: None,
            seed: None,
            debug: false,
        }
    }

    /// Options from the process arguments and environment.
    ///
    /// Malformed values are reported with `log::warn!` and leave the default.
    #[must_use]
    pub fn from_env() -> Self {
        let seat_arg = env::args().nth(1);
        Self::from_sources(seat_arg.as_deref(), |name| env::var(name).ok())
    }

    /// Options from an optional seat argument and a variable lookup.
    pub fn from_sources<F>(seat_arg: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = PlayerOptions::new();
        options.seat = seat_arg.and_then(parse_seat_arg);
        if seat_arg.is_some() && options.seat.is_none() {
            log::warn!("unrecognised seat argument {seat_arg:?}, resolving from protocol");
        }

        options.debug = lookup(ENV_DEBUG).is_some_and(|v| v.trim() == "1");

        for name in [ENV_TIME_MS, ENV_DEPTH, ENV_SCORE_FILE, ENV_SEED] {
            let Some(value) = lookup(name) else {
                continue;
            };
            if let Err(e) = options.apply(name, &value) {
                log::warn!("{e}");
            }
        }

        options
    }

    /// Set one option by environment variable name.
    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), ArbiterError> {
        match name {
            ENV_TIME_MS => {
                let ms: u64 = parse_value(ENV_TIME_MS, value)?;
                self.search.time_budget = Duration::from_millis(ms);
            }
            ENV_DEPTH => {
                let depth: u32 = parse_value(ENV_DEPTH, value)?;
                self.search.max_depth = depth.max(1);
            }
            ENV_SCORE_FILE => {
                let path = value.trim();
                self.score_file = (!path.is_empty()).then(|| PathBuf::from(path));
            }
            ENV_SEED => {
                self.seed = Some(parse_value(ENV_SEED, value)?);
            }
            _ => {}
        }
        Ok(())
    }

    /// Short name for log lines: the seat argument if known.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.seat {
            Some(Seat::First) => FIRST_SEAT_ARG,
            Some(Seat::Second) => SECOND_SEAT_ARG,
            None => "player",
        }
    }
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// `Joueur1` plays first, `Joueur2` second.
#[must_use]
pub fn parse_seat_arg(arg: &str) -> Option<Seat> {
    let arg = arg.trim();
    if arg.eq_ignore_ascii_case(FIRST_SEAT_ARG) {
        Some(Seat::First)
    } else if arg.eq_ignore_ascii_case(SECOND_SEAT_ARG) {
        Some(Seat::Second)
    } else {
        None
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ArbiterError> {
    value
        .trim()
        .parse()
        .map_err(|_| ArbiterError::InvalidOption {
            name,
            value: value.to_string(),
        })
}

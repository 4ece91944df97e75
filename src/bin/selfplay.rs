//! Bot-versus-bot game, printing each move in match notation.
//!
//! Usage: selfplay [--games N] [--depth D] [--time-ms T] [--seed S] [--verbose]
//!
//! The `AWALE_*` environment variables set the defaults for depth, time and seed.

use std::process::ExitCode;
use std::time::Duration;

use awale_engine::arbiter::PlayerOptions;
use awale_engine::board::{Bot, GameState, SearchConfig, Seat};
use awale_engine::logger;

struct Settings {
    games: u32,
    search: SearchConfig,
    seed: Option<u64>,
    verbose: bool,
}

fn parse_args(defaults: &PlayerOptions) -> Result<Option<Settings>, String> {
    let mut settings = Settings {
        games: 1,
        search: defaults.search,
        seed: defaults.seed,
        verbose: false,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match arg.as_str() {
            "--games" | "-g" => {
                settings.games = value("--games")?.parse().map_err(|e| format!("--games: {e}"))?;
            }
            "--depth" | "-d" => {
                let depth: u32 = value("--depth")?.parse().map_err(|e| format!("--depth: {e}"))?;
                settings.search.max_depth = depth.max(1);
            }
            "--time-ms" | "-t" => {
                let ms: u64 = value("--time-ms")?.parse().map_err(|e| format!("--time-ms: {e}"))?;
                settings.search.time_budget = Duration::from_millis(ms);
            }
            "--seed" | "-s" => {
                settings.seed = Some(value("--seed")?.parse().map_err(|e| format!("--seed: {e}"))?);
            }
            "--verbose" | "-v" => settings.verbose = true,
            "--help" | "-h" => {
                println!("Usage: selfplay [OPTIONS]");
                println!("  --games N     Number of games to play (default: 1)");
                println!("  --depth D     Search depth cap (default: {})", defaults.search.max_depth);
                println!(
                    "  --time-ms T   Time budget per move in ms (default: {})",
                    defaults.search.time_budget.as_millis()
                );
                println!("  --seed S      Shuffle seed for reproducible games");
                println!("  --verbose     Print the board after every move");
                return Ok(None);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(Some(settings))
}

fn make_bot(settings: &Settings, seat: Seat, game: u32) -> Bot {
    let config = SearchConfig { seat, ..settings.search };
    match settings.seed {
        Some(seed) => Bot::with_seed(config, seed ^ (u64::from(game) << 1) ^ seat.index() as u64),
        None => Bot::new(config),
    }
}

/// Play one game to the end. Returns the final state and whether a seat was blocked.
fn play_game(settings: &Settings, game: u32) -> (GameState, Option<Seat>) {
    let mut bots = [
        make_bot(settings, Seat::First, game),
        make_bot(settings, Seat::Second, game),
    ];
    let mut state = GameState::new();

    while !state.is_game_over() {
        let seat = state.side_to_move();
        let Some(mv) = bots[seat.index()].choose_move(&state) else {
            return (state, Some(seat));
        };
        if let Err(e) = state.apply_move(mv) {
            log::error!("bot for {seat} chose illegal move {mv}: {e}");
            return (state, Some(seat));
        }
        println!("{mv}");
        if settings.verbose {
            eprintln!("{state}");
        }
    }
    (state, None)
}

fn main() -> ExitCode {
    let defaults = PlayerOptions::from_sources(None, |name| std::env::var(name).ok());
    if let Err(e) = logger::init("selfplay", logger::level_for(defaults.debug)) {
        eprintln!("logger setup failed: {e}");
    }

    let settings = match parse_args(&defaults) {
        Ok(Some(settings)) => settings,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    for game in 0..settings.games {
        let (state, blocked) = play_game(&settings, game);
        let [s1, s2] = state.scores();
        match blocked {
            Some(seat) => println!("RESULT BLOCKED {s1} {s2} ({seat} cannot move)"),
            None => println!("RESULT {} {s1} {s2} after {} moves", state.status(), state.moves_played()),
        }

        match state.status().winner() {
            Some(seat) => wins[seat.index()] += 1,
            None => draws += 1,
        }
    }

    if settings.games > 1 {
        println!(
            "Player 1: {} wins, Player 2: {} wins, {} draws",
            wins[0], wins[1], draws
        );
    }
    ExitCode::SUCCESS
}

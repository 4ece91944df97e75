use std::io;
use std::process::ExitCode;

use awale_engine::arbiter::{run_player_loop, Player, PlayerOptions};
use awale_engine::logger;

fn main() -> ExitCode {
    let options = PlayerOptions::from_env();
    if let Err(e) = logger::init(options.label(), logger::level_for(options.debug)) {
        eprintln!("logger setup failed: {e}");
    }
    log::info!("player started as {}", options.label());

    let mut player = Player::new(options);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_player_loop(&mut player, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("player loop failed: {e}");
            ExitCode::FAILURE
        }
    }
}

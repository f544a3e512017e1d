//! Space Invaders entry point
//!
//! Headless driver: runs the simulation in attract mode at the fixed
//! timestep and logs the outcome. The graphical shell (engine windowing,
//! sprites, input callbacks) hosts the library the same way, swapping the
//! autopilot for real input.

use space_invaders::consts::SIM_DT;
use space_invaders::sim::{GamePhase, GameState, TickInput, tick};
use space_invaders::{HighScores, Tuning};

struct Args {
    seed: u64,
    /// How many demo runs to play before exiting
    runs: u32,
    tuning_path: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: 2026,
        runs: 4,
        tuning_path: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = value.parse().map_err(|_| format!("bad seed: {value}"))?;
            }
            "--runs" => {
                let value = iter.next().ok_or("--runs needs a value")?;
                args.runs = value.parse().map_err(|_| format!("bad run count: {value}"))?;
            }
            "--tuning" => {
                args.tuning_path = Some(iter.next().ok_or("--tuning needs a path")?);
            }
            other => return Err(format!("unknown flag: {other}")),
        }
    }
    Ok(args)
}

fn load_tuning(path: Option<&str>) -> Result<Tuning, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read {path}: {err}"))?;
            let tuning = Tuning::from_json_str(&json).map_err(|err| err.to_string())?;
            log::info!("loaded tuning from {path}");
            Ok(tuning)
        }
        None => Ok(Tuning::default()),
    }
}

fn main() {
    env_logger::init();
    log::info!("Space Invaders (headless attract mode) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            log::error!("{err}");
            eprintln!("usage: space-invaders [--seed N] [--runs N] [--tuning FILE]");
            std::process::exit(2);
        }
    };

    let tuning = match load_tuning(args.tuning_path.as_deref()) {
        Ok(tuning) => tuning,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let mut scores = HighScores::new();
    let mut runs_played = 0;

    // Each demo run gets its own seed so attract mode cycles the models
    while runs_played < args.runs {
        let seed = args.seed + runs_played as u64;
        let mut state = GameState::with_tuning(seed, tuning.clone());
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        // Generous cap so a stalemate can't hang the process
        let max_ticks = 120 * 600;
        let outcome = loop {
            tick(&mut state, &input, SIM_DT);
            for event in state.take_events() {
                log::debug!("tick {}: {event:?}", state.time_ticks);
            }
            match state.phase {
                GamePhase::Won | GamePhase::Lost => break state.phase,
                _ if state.time_ticks >= max_ticks => break GamePhase::Lost,
                _ => {}
            }
        };

        let rank = scores.add_score(state.score, state.model, state.time_ticks);
        println!(
            "run {}: {:?} model={} score={} ticks={}{}",
            runs_played + 1,
            outcome,
            state.model.as_str(),
            state.score,
            state.time_ticks,
            rank.map(|r| format!(" (leaderboard #{r})")).unwrap_or_default(),
        );

        runs_played += 1;
    }

    if let Some(top) = scores.top_score() {
        println!("best score this session: {top}");
    }
}

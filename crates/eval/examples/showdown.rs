// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Plays each game in a sample hands file, one game per line with ten cards,
// five for player one followed by five for player two:
//
// ```bash
// $ cargo r --example showdown -- --hands crates/eval/data/hands.txt
// ...
// Games:      10
// Player one: 4
// Player two: 5
// Draws:      1
// ```
//
// Use `RUST_LOG=debug` to log each game categories.
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use std::{fs, path::PathBuf};

use fivecard_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The sample hands file.
    #[clap(long, short = 'f', default_value = "crates/eval/data/hands.txt")]
    hands: PathBuf,
    /// Stop at the first invalid line instead of skipping it.
    #[clap(long, short)]
    strict: bool,
}

/// Showdown configuration.
#[derive(Debug)]
struct Config {
    hands: PathBuf,
    strict: bool,
}

#[derive(Debug, Default)]
struct Tally {
    player_one: usize,
    player_two: usize,
    draws: usize,
    skipped: usize,
}

impl Tally {
    fn games(&self) -> usize {
        self.player_one + self.player_two + self.draws
    }
}

fn run(config: Config) -> Result<Tally> {
    let contents = fs::read_to_string(&config.hands)
        .with_context(|| format!("Cannot read hands file {}", config.hands.display()))?;

    info!("Playing games from {}", config.hands.display());

    let mut tally = Tally::default();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let game = match line.parse::<OneDeckGame>() {
            Ok(game) => game,
            Err(e) if !config.strict => {
                error!("Skipping line {}: {e}", idx + 1);
                tally.skipped += 1;
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("Invalid line {}", idx + 1)),
        };

        debug!(
            "{} vs {}",
            classify(game.hand_1()),
            classify(game.hand_2())
        );

        match game.winner() {
            Outcome::AWins => tally.player_one += 1,
            Outcome::BWins => tally.player_two += 1,
            Outcome::Draw => tally.draws += 1,
        }
    }

    Ok(tally)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config {
        hands: cli.hands,
        strict: cli.strict,
    };

    let tally = run(config)?;
    println!("Games:      {}", tally.games());
    println!("Player one: {}", tally.player_one);
    println!("Player two: {}", tally.player_two);
    println!("Draws:      {}", tally.draws);
    if tally.skipped > 0 {
        println!("Skipped:    {}", tally.skipped);
    }

    Ok(())
}

//! `mordor` - play the adventure in a terminal.
//!
//! ```bash
//! mordor --name Gimli --race orc --seed 7
//! RUST_LOG=combat_rules=debug mordor --config mordor.toml
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use adventure_shell::{logging, Shell};
use anyhow::{Context, Result};
use clap::Parser;
use combat_rules::items::starting_items;
use combat_rules::{Character, Dice, Game, GameConfig, Race, SeededDice};

#[derive(Parser, Debug)]
#[command(name = "mordor", about = "A turn-based adventure through Middle-earth", version)]
struct Args {
    /// Your character's name
    #[arg(long, default_value = "Wanderer")]
    name: String,

    /// Playable race: orc, elf or human
    #[arg(long, default_value = "human", value_parser = parse_race)]
    race: Race,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding combat and world settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print combat snapshots as JSON instead of narration
    #[arg(long)]
    json: bool,
}

fn parse_race(text: &str) -> Result<Race, String> {
    let race: Race = text.parse()?;
    if race.is_playable() {
        Ok(race)
    } else {
        Err(format!("{race} is not a playable race"))
    }
}

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let dice = match args.seed {
        Some(seed) => SeededDice::new(seed),
        None => SeededDice::from_entropy(),
    };
    tracing::info!(seed = dice.seed(), name = %args.name, race = %args.race, "starting game");
    let dice: Box<dyn Dice + Send> = Box::new(dice);

    let player = Character::new(args.name, args.race).with_items(starting_items());
    let mut shell = Shell::new(Game::new(player, config, dice));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in shell.welcome() {
        writeln!(out, "{line}")?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buffer = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            break;
        }

        let reply = shell.handle(&buffer);
        match (&reply.state, args.json) {
            (Some(state), true) => writeln!(out, "{}", state.to_json()?)?,
            _ => {
                for line in &reply.lines {
                    writeln!(out, "{line}")?;
                }
            }
        }
        if reply.quit {
            break;
        }
    }

    Ok(())
}

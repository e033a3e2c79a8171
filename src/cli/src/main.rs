#![warn(clippy::pedantic)]

mod config;
mod render;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use cube_core::{
    Cube, StickerSheet, format_notation, invert_moves, parse_notation, random_scramble,
    scramble_cube, solve, start, success, validate,
};
use env_logger::TimestampPrecision;
use fastrand::Rng;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;

use crate::config::Config;

/// Turns, checks and solves 3x3x3 cubes
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube/config.toml` in the user's configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    /// Print cube nets and solutions without color
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a scramble to a solved cube and solve it step by step.
    Solve {
        /// The scramble, e.g. "R U R' U'".
        scramble: String,
        /// Print the solution as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a random scramble.
    Scramble {
        /// How many moves; defaults to the configured length.
        #[arg(long)]
        length: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply moves to a cube and print the result.
    Apply {
        /// The moves to apply, e.g. "F2 D'".
        moves: String,
        /// Start from this JSON sticker sheet instead of a solved cube.
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,
        /// Print the resulting sticker sheet as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check a JSON sticker sheet and list everything wrong with it.
    Validate {
        /// The sticker sheet, e.g. `{"U": ["Y", ...], ...}`.
        file: PathBuf,
    },
    /// Print the inverse of a move sequence.
    Invert {
        /// The moves to invert.
        moves: String,
    },
    /// Solve random scrambles and report any the solver fails on.
    Check {
        /// How many scrambles; defaults to the configured count.
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let color = config.display.color && !cli.no_color;

    match cli.command {
        Commands::Solve { scramble, json } => {
            let mut cube = Cube::new();
            cube.apply_notation(&scramble)?;

            let solution = solve(&cube);
            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                println!("{}", render::solution(&solution, color));
            }

            if !solution.verify(&cube) {
                return Err(eyre!("The solver stopped before the cube was solved"));
            }
        }
        Commands::Scramble { length, seed } => {
            let mut rng = rng(seed.or(config.scramble.seed));
            let moves = random_scramble(length.unwrap_or(config.scramble.length), &mut rng);
            println!("{}", format_notation(&moves));
        }
        Commands::Apply { moves, state, json } => {
            let mut cube = match state {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                    Cube::from_json(&text)?
                }
                None => Cube::new(),
            };
            cube.apply_notation(&moves)?;

            if json {
                println!("{}", cube.to_json()?);
            } else {
                println!("{}", render::net(&cube.state(), color));
                if cube.is_solved() {
                    println!("Solved");
                }
            }
        }
        Commands::Validate { file } => {
            let text = fs::read_to_string(&file)
                .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
            let sheet = serde_json::from_str::<StickerSheet>(&text)?;

            let result = validate(&sheet);
            if result.valid {
                if color {
                    println!("{}", "Valid".green());
                } else {
                    println!("Valid");
                }
            } else {
                for error in &result.errors {
                    println!("{error}");
                }
                return Err(eyre!("{} has {} problems", file.display(), result.errors.len()));
            }
        }
        Commands::Invert { moves } => {
            println!("{}", format_notation(&invert_moves(&parse_notation(&moves)?)));
        }
        Commands::Check { count, seed } => {
            let count = count.unwrap_or(config.check.count);
            let mut rng = rng(seed.or(config.scramble.seed));
            check(count, config.scramble.length, &mut rng)?;
        }
    }

    Ok(())
}

fn rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn check(count: usize, length: usize, rng: &mut Rng) -> color_eyre::Result<()> {
    info!(start!("Solving {} random scrambles"), count);

    let mut failures = vec![];
    let mut total = 0;
    let mut longest = 0;

    for _ in 0..count {
        let scramble = random_scramble(length, rng);
        let cube = scramble_cube(&scramble);
        let solution = solve(&cube);

        total += solution.total_moves;
        longest = longest.max(solution.total_moves);
        if !solution.verify(&cube) {
            warn!("Failed to solve {}", format_notation(&scramble));
            failures.push(scramble);
        }
    }

    let average = if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    };
    println!(
        "Solved {}/{count} scrambles, {average:.1} moves on average, {longest} at most",
        count - failures.len()
    );

    if failures.is_empty() {
        info!(success!("Every scramble was solved"));
        Ok(())
    } else {
        for scramble in &failures {
            println!("  {}", format_notation(scramble));
        }
        Err(eyre!("{} scrambles were not solved", failures.len()))
    }
}

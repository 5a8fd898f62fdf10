/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Gridlock.

Gridlock is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridlock is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridlock. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Gridlock generates random puzzles, prints them with their solution, and can also play a puzzle
//! in the terminal.
//!
//! # Examples
//!
//! Generate a puzzle from a seed and print the traversal steps:
//!
//! ```text
//! $ gridlock --seed 42 --trace
//! ```
//!
//! Generate three single-page puzzles in JSON format:
//!
//! ```text
//! $ gridlock -c 3 -p 1 -f json
//! ```
//!
//! Play a puzzle, and keep the game in progress in a directory when quitting:
//!
//! ```text
//! $ gridlock --play --data-dir ~/.local/share/gridlock
//! Page 1/7
//!     A  B  C  D
//! 1  GT .  ↑  .
//! ...
//! > next
//! > B3
//! ```

use clap::{Parser, ValueEnum};
use log::{debug, error};
use serde_json::json;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use gridlock::config::COPYRIGHT_NOTICE;
use gridlock::draw;
use gridlock::game::{Game, GuessOutcome};
use gridlock::generator::grid::{cell_name, parse_cell_name};
use gridlock::generator::random_grid;
use gridlock::generator::rng::GridRng;
use gridlock::saver::game::SaverGame;

/// Output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
enum Format {
    #[default]
    Text,
    Json,
}

/// Generate and play Gridlock puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Seed for the random generator. A random seed is used if not provided
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of puzzles to generate (1 to 1000)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=1000))]
    count: u16,

    /// Number of pages (1 to 10). By default, a random number between 5 and 10
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pages: Option<u8>,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Text)]
    format: Format,

    /// Print the traversal steps
    #[arg(short, long, default_value_t = false)]
    trace: bool,

    /// Play a puzzle in the terminal
    #[arg(long, default_value_t = false)]
    play: bool,

    /// Directory where the game in progress is saved when quitting
    #[arg(long, requires = "play")]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Generate a game, with a random number of pages if `pages` is not provided.
fn new_game(session_id: u32, pages: Option<u8>, rng: &mut GridRng) -> Result<Game, Box<dyn Error>> {
    let puzzle = match pages {
        Some(n) => random_grid::generate_pages(n as usize, rng)?,
        None => random_grid::generate(rng),
    };
    Ok(Game::new(session_id, puzzle)?)
}

/// Print the puzzles in text format.
fn print_text(seed: u64, games: &[Game], trace: bool) {
    println!("Seed: {seed}");
    for game in games {
        println!();
        println!("Puzzle #{}", game.session_id());
        for (i, page) in game.puzzle().pages().iter().enumerate() {
            println!();
            print!("{}", draw::draw_page(page, i + 1, game.total_pages()));
        }
        println!();
        println!("Start: {}", cell_name(game.puzzle().start_cell()));
        println!("Solution: {}", cell_name(game.solution_cell()));
        if trace {
            for s in game.trace() {
                println!("  {s}");
            }
        }
    }
}

/// Print the puzzles in JSON format.
fn print_json(seed: u64, games: &[Game], trace: bool) -> Result<(), Box<dyn Error>> {
    let puzzles: Vec<serde_json::Value> = games
        .iter()
        .map(|game| {
            let mut p = json!({
                "session_id": game.session_id(),
                "puzzle": game.puzzle(),
                "solution_cell": game.solution_cell(),
                "solution": cell_name(game.solution_cell()),
            });
            if trace {
                p["trace"] = json!(game.trace());
            }
            p
        })
        .collect();
    let out = json!({ "seed": seed, "puzzles": puzzles });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Play a game from the terminal.
///
/// Commands are a cell name (`A1` to `D4`) to guess the solution, `next` to display the next
/// page, and `quit` to stop.
fn play(
    pages: Option<u8>,
    rng: &mut GridRng,
    data_dir: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let saver: Option<SaverGame> = data_dir.map(SaverGame::new);

    let restored: Option<Game> = match &saver {
        Some(s) => s.get_game()?,
        None => None,
    };
    let mut game: Game = match restored {
        Some(g) => {
            println!("Continuing the saved puzzle.");
            g
        }
        None => {
            println!("Seed: {}", rng.seed());
            new_game(1, pages, rng)?
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        print!(
            "{}",
            draw::draw_page(
                &game.visible_page(),
                game.current_page_number(),
                game.total_pages()
            )
        );
        print!("> ");
        io::stdout().flush()?;

        let line: String = match lines.next() {
            Some(l) => l?,
            None => break,
        };
        let command: String = line.trim().to_lowercase();
        debug!("{} Command `{command}`", game.label());
        match command.as_str() {
            "" => continue,
            "next" | "n" => game.advance_page(),
            "quit" | "q" => break,
            name => match parse_cell_name(name) {
                Ok(cell) => match game.guess(cell)? {
                    GuessOutcome::Correct => {
                        println!(
                            "{} is correct. Puzzle solved with {} strike(s).",
                            cell_name(cell),
                            game.strikes()
                        );
                        if let Some(s) = &saver {
                            s.delete_save();
                        }
                        return Ok(());
                    }
                    GuessOutcome::Incorrect => {
                        println!("{} is wrong. Strike {}.", cell_name(cell), game.strikes());
                    }
                },
                Err(e) => eprintln!("{e}. Commands: A1 to D4, next, quit"),
            },
        }
    }

    if let Some(s) = &saver {
        s.save_game(&game)?;
        println!("Game saved.");
    }
    Ok(())
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut rng: GridRng = match args.seed {
        Some(seed) => GridRng::new(seed),
        None => GridRng::from_entropy(),
    };

    if args.play {
        return match play(args.pages, &mut rng, args.data_dir) {
            Ok(()) => 0,
            Err(e) => {
                error!("{e}");
                1
            }
        };
    }

    let mut games: Vec<Game> = Vec::new();
    for i in 0..args.count as usize {
        match new_game(i as u32 + 1, args.pages, &mut rng) {
            Ok(g) => games.push(g),
            Err(e) => {
                error!("Cannot generate puzzle #{}: {e}", i + 1);
                return 1;
            }
        }
    }

    match args.format {
        Format::Text => print_text(rng.seed(), &games, args.trace),
        Format::Json => {
            if let Err(e) = print_json(rng.seed(), &games, args.trace) {
                error!("{e}");
                return 1;
            }
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_pages_range() {
        assert!(Args::try_parse_from(["gridlock", "-p", "1"]).is_ok());
        assert!(Args::try_parse_from(["gridlock", "-p", "10"]).is_ok());
        assert!(Args::try_parse_from(["gridlock", "-p", "0"]).is_err());
        assert!(Args::try_parse_from(["gridlock", "-p", "11"]).is_err());
    }

    #[test]
    fn test_count_range() {
        assert!(Args::try_parse_from(["gridlock", "-c", "1000"]).is_ok());
        assert!(Args::try_parse_from(["gridlock", "-c", "0"]).is_err());
        assert!(Args::try_parse_from(["gridlock", "-c", "1001"]).is_err());
        assert!(Args::try_parse_from(["gridlock", "-c", "18446744073709551615"]).is_err());
    }

    #[test]
    fn test_data_dir_requires_play() {
        assert!(Args::try_parse_from(["gridlock", "--data-dir", "/tmp"]).is_err());
        assert!(Args::try_parse_from(["gridlock", "--play", "--data-dir", "/tmp"]).is_ok());
    }

    #[test]
    fn test_new_game_with_pages() {
        let mut rng = GridRng::new(5);
        let game = new_game(1, Some(2), &mut rng).unwrap();
        assert_eq!(game.total_pages(), 2);

        let game = new_game(2, None, &mut rng).unwrap();
        assert!((5..=10).contains(&game.total_pages()));
    }
}

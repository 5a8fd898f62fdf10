/*
lib.rs

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

//! Gridlock puzzle generator and solver.
//!
//! A puzzle is a stack of 4x4 pages of symbols. Starting from the star on the first page, a
//! fixed set of movement rules leads from cell to cell, possibly switching pages, until no
//! unvisited cell can be reached. The cell where the movement is stuck is the solution that the
//! player must find.
//!
//! * [`generator`] builds random puzzles and computes their solution.
//! * [`game`] tracks the displayed page and the player's guesses.
//! * [`saver`] saves and restores a game in progress.
//! * [`draw`] renders pages as text.
//!
//! ```
//! use gridlock::game::{Game, GuessOutcome};
//! use gridlock::generator::rng::GridRng;
//!
//! let mut game = Game::generate(1, &mut GridRng::new(42)).unwrap();
//! let solution = game.solution_cell();
//! assert_eq!(game.guess(solution), Ok(GuessOutcome::Correct));
//! assert!(game.is_solved());
//! ```

pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod input_errors;
pub mod saver;

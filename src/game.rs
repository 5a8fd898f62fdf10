/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The puzzle and its solution are computed when the [`Game`] object is created and do not change
//! afterward. Only the displayed page, the solved status, and the mistake counter change while
//! the player pages through the puzzle and guesses the solution cell.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CELLS;
use crate::generator::grid::{Page, Puzzle, cell_name};
use crate::generator::random_grid;
use crate::generator::rng::RngSource;
use crate::generator::traversal::{self, Solution, SolveError, TraceStep};
use crate::input_errors::InputErrors;

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    /// The guessed cell is out of the page.
    #[error("cell index {0} is not between 0 and 15")]
    InvalidCell(usize),

    /// The puzzle cannot be solved.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// The stored solution or page does not match the puzzle.
    #[error("the game status does not match its puzzle")]
    Inconsistent,
}

/// Result of a guess.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guessed cell is the solution. The puzzle is solved.
    Correct,

    /// The guessed cell is not the solution, or the puzzle is already solved.
    Incorrect,
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Identifier provided by the host, used to label the log messages.
    session_id: u32,

    /// Puzzle details.
    puzzle: Puzzle,

    /// Solution cell and traversal trace.
    solution: Solution,

    /// Page displayed to the player, starting at 0.
    current_page: usize,

    /// Whether the puzzle is solved.
    solved: bool,

    /// Manage the mistake counter.
    input_errors: InputErrors,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle.
    ///
    /// # Errors
    ///
    /// The method returns an error if the puzzle cannot be solved, which indicates a bug in the
    /// movement rules.
    pub fn new(session_id: u32, puzzle: Puzzle) -> Result<Self, GameError> {
        let solution: Solution = traversal::solve(&puzzle)?;
        let game = Self {
            session_id,
            puzzle,
            solution,
            current_page: 0,
            solved: false,
            input_errors: InputErrors::new(),
        };
        for s in &game.solution.trace {
            info!("{} {s}", game.label());
        }
        info!(
            "{} Pages = {}  Solution = {}",
            game.label(),
            game.total_pages(),
            cell_name(game.solution.cell)
        );
        Ok(game)
    }

    /// Generate a random puzzle and create the [`Game`] object.
    ///
    /// # Errors
    ///
    /// See [`Game::new`].
    pub fn generate(session_id: u32, rng: &mut dyn RngSource) -> Result<Self, GameError> {
        Self::new(session_id, random_grid::generate(rng))
    }

    /// Prefix for the log messages.
    pub fn label(&self) -> String {
        format!("[Gridlock #{}]", self.session_id)
    }

    /// Return the session identifier.
    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Display the next page. After the last page, the first page is displayed again.
    pub fn advance_page(&mut self) {
        if self.solved {
            return;
        }
        self.current_page = (self.current_page + 1) % self.puzzle.page_count();
    }

    /// Submit a guess for the solution cell.
    ///
    /// A wrong guess counts as a mistake and goes back to the first page.
    /// Once the puzzle is solved, guesses are ignored and reported as incorrect.
    ///
    /// # Errors
    ///
    /// The method returns an error if the cell index is not between 0 and 15.
    pub fn guess(&mut self, cell: usize) -> Result<GuessOutcome, GameError> {
        if cell >= CELLS {
            return Err(GameError::InvalidCell(cell));
        }
        if self.solved {
            return Ok(GuessOutcome::Incorrect);
        }
        if cell == self.solution.cell {
            info!(
                "{} {} pressed on page {}. Puzzle solved.",
                self.label(),
                cell_name(cell),
                self.current_page_number()
            );
            self.solved = true;
            Ok(GuessOutcome::Correct)
        } else {
            warn!(
                "{} {} pressed on page {}. Expected {}. Strike.",
                self.label(),
                cell_name(cell),
                self.current_page_number(),
                cell_name(self.solution.cell)
            );
            self.input_errors.add_cell(cell);
            self.current_page = 0;
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// Return the page to display. Once the puzzle is solved, the page is blank.
    pub fn visible_page(&self) -> Page {
        if self.solved {
            return Page::blank();
        }
        match self.puzzle.page(self.current_page) {
            Some(p) => *p,
            None => Page::blank(),
        }
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Return the displayed page number, starting at 1.
    pub fn current_page_number(&self) -> usize {
        self.current_page + 1
    }

    /// Return the number of pages.
    pub fn total_pages(&self) -> usize {
        self.puzzle.page_count()
    }

    /// Return the solution cell.
    pub fn solution_cell(&self) -> usize {
        self.solution.cell
    }

    /// Return the steps of the traversal.
    pub fn trace(&self) -> &[TraceStep] {
        &self.solution.trace
    }

    /// Return the puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the number of wrong guesses.
    pub fn strikes(&self) -> usize {
        self.input_errors.get_errors()
    }

    /// Return the cells that have been wrongly guessed.
    pub fn wrong_cells(&self) -> &[usize] {
        self.input_errors.get_cells()
    }

    /// Verify that the stored solution and page match the puzzle.
    ///
    /// This is used when restoring a saved game.
    ///
    /// # Errors
    ///
    /// The method returns an error if the solution differs from the one computed from the puzzle,
    /// or if the current page does not exist.
    pub fn verify(&self) -> Result<(), GameError> {
        let solution: Solution = traversal::solve(&self.puzzle)?;
        if solution != self.solution || self.current_page >= self.puzzle.page_count() {
            return Err(GameError::Inconsistent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::rng::GridRng;
    use crate::generator::symbol::{Color, Icon, Symbol};
    use proptest::prelude::*;

    /// Three pages, green star at A1, solution at B1.
    fn small_game() -> Game {
        let mut first = Page::blank();
        first.set(0, Symbol::colored(Icon::Star, Color::Green));
        let mut second = Page::blank();
        second.set(7, Symbol::arrow(Icon::ArrowN));
        let puzzle = Puzzle::new(vec![first, second, Page::blank()], 0).unwrap();
        Game::new(1, puzzle).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = small_game();
        assert_eq!(game.solution_cell(), 1);
        assert_eq!(game.current_page_number(), 1);
        assert_eq!(game.total_pages(), 3);
        assert!(!game.is_solved());
        assert_eq!(game.strikes(), 0);
        assert_eq!(game.label(), "[Gridlock #1]");
    }

    #[test]
    fn test_advance_page_wraps() {
        let mut game = small_game();
        game.advance_page();
        assert_eq!(game.current_page_number(), 2);
        assert_eq!(game.visible_page().get(7), Symbol::arrow(Icon::ArrowN));
        game.advance_page();
        game.advance_page();
        assert_eq!(game.current_page_number(), 1);
    }

    #[test]
    fn test_wrong_guess_resets_page() {
        let mut game = small_game();
        game.advance_page();
        game.advance_page();

        assert_eq!(game.guess(5), Ok(GuessOutcome::Incorrect));
        assert_eq!(game.current_page_number(), 1);
        assert!(!game.is_solved());
        assert_eq!(game.strikes(), 1);
        assert_eq!(game.wrong_cells(), &[5]);

        // Still retryable
        assert_eq!(game.guess(5), Ok(GuessOutcome::Incorrect));
        assert_eq!(game.strikes(), 2);
    }

    #[test]
    fn test_correct_guess_solves() {
        let mut game = small_game();
        game.advance_page();

        assert_eq!(game.guess(1), Ok(GuessOutcome::Correct));
        assert!(game.is_solved());
        assert_eq!(game.visible_page(), Page::blank());

        // Everything is ignored once solved
        game.advance_page();
        assert_eq!(game.current_page_number(), 2);
        assert_eq!(game.guess(1), Ok(GuessOutcome::Incorrect));
        assert_eq!(game.guess(4), Ok(GuessOutcome::Incorrect));
        assert_eq!(game.current_page_number(), 2);
        assert_eq!(game.strikes(), 0);
        assert!(game.is_solved());
    }

    #[test]
    fn test_invalid_guess() {
        let mut game = small_game();
        assert_eq!(game.guess(16), Err(GameError::InvalidCell(16)));
        assert_eq!(game.strikes(), 0);
    }

    #[test]
    fn test_verify() {
        let game = small_game();
        assert_eq!(game.verify(), Ok(()));

        let mut tampered = game.clone();
        tampered.solution.cell = 2;
        assert_eq!(tampered.verify(), Err(GameError::Inconsistent));

        let mut tampered = game;
        tampered.current_page = 3;
        assert_eq!(tampered.verify(), Err(GameError::Inconsistent));
    }

    proptest! {
        #[test]
        fn prop_guesses(seed in any::<u64>(), wrong in 0usize..16) {
            let mut game = Game::generate(seed as u32, &mut GridRng::new(seed)).unwrap();
            let solution = game.solution_cell();

            game.advance_page();
            if wrong != solution {
                prop_assert_eq!(game.guess(wrong), Ok(GuessOutcome::Incorrect));
                prop_assert_eq!(game.current_page_number(), 1);
            }
            prop_assert_eq!(game.guess(solution), Ok(GuessOutcome::Correct));
            prop_assert!(game.is_solved());

            let page = game.current_page_number();
            game.advance_page();
            prop_assert_eq!(game.guess(wrong), Ok(GuessOutcome::Incorrect));
            prop_assert_eq!(game.current_page_number(), page);
        }
    }
}

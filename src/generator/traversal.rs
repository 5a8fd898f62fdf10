/*
traversal.rs

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

//! Find the solution cell of a puzzle.
//!
//! The traversal starts on the star of the first page and follows the movement rules (see
//! [`super::rules`]) from cell to cell:
//!
//! 1. The direction is read from the current cell. Colored shapes also record their color as the
//!    last collected color, and switch to the next page (after the last page, back to the first
//!    one).
//! 2. From the current cell, the traversal slides in that direction, wrapping around the page
//!    edges, and skips the cells that it already visited.
//! 3. If the slide comes back to the current cell without finding an unvisited cell, the
//!    traversal is in gridlock and the current cell is the solution.
//!    A `(0, 0)` direction is always a gridlock.
//!
//! Every step adds a cell to the visited set, so there are at most 16 steps.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::grid::{Puzzle, cell_name, step};
use super::rules::{Direction, arrow_direction, color_direction, shape_direction};
use super::symbol::{Color, Icon, Symbol};
use crate::config::{CELLS, GRID_SIZE};

/// Upper bound of the number of steps: each step but the last one visits a new cell.
const MAX_STEPS: usize = CELLS;

/// Type of errors.
///
/// None of these errors occur with a valid [`Puzzle`] object. They indicate a bug in the rules or
/// in the generator.
#[derive(Error, Debug, PartialEq)]
pub enum SolveError {
    /// The traversal did not end within 16 steps.
    #[error("traversal did not end after {0} steps")]
    StepLimit(usize),

    /// A blank cell was reached before any color was collected.
    #[error("page {page}, cell {cell}: blank cell reached before any color was collected")]
    UnsetColor { page: usize, cell: usize },

    /// No movement rule for the symbol.
    #[error("page {page}, cell {cell}: no movement rule for {symbol}")]
    NoRule {
        page: usize,
        cell: usize,
        symbol: Symbol,
    },
}

/// Why the traversal moves in a direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Colored shape: the direction depends on the shape and its color.
    Colored { icon: Icon, color: Color },

    /// Arrow: the direction is the arrow's direction.
    Arrow(Icon),

    /// Blank cell: the direction depends on the last collected color and on the cell position.
    Blank { last_color: Color },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reason::Colored { icon, color } => write!(f, "{color} {icon}"),
            Reason::Arrow(icon) => write!(f, "{icon}"),
            Reason::Blank { last_color } => write!(f, "Blank with last color {last_color}"),
        }
    }
}

/// One step of the traversal.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TraceStep {
    /// Page (starting at 0) that was read.
    pub page: usize,

    /// Cell that was read.
    pub cell: usize,

    /// Symbol of the cell.
    pub symbol: Symbol,

    /// Rule used for the direction.
    pub reason: Reason,

    /// Direction of the movement.
    pub direction: Direction,

    /// Whether the step switched to the next page.
    pub page_switched: bool,

    /// Cell the traversal moved to, or `None` for the final gridlock step.
    pub next: Option<usize>,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Page {}, {}: {}, direction ({}, {})",
            self.page + 1,
            cell_name(self.cell),
            self.reason,
            self.direction.0,
            self.direction.1
        )?;
        if self.page_switched {
            write!(f, ", page switch")?;
        }
        match self.next {
            Some(c) => write!(f, ", move to {}", cell_name(c)),
            None => write!(f, ", gridlock"),
        }
    }
}

/// Result of the traversal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Cell where the traversal ended.
    pub cell: usize,

    /// Visited cells, in the visiting order. The first one is the starting cell.
    pub taken: Vec<usize>,

    /// Steps of the traversal.
    pub trace: Vec<TraceStep>,
}

/// Slide from `origin` in the given direction and return the first cell not yet visited.
///
/// Return `None` if the slide comes back to `origin`.
fn slide(origin: usize, (x_dir, y_dir): Direction, taken: &[bool; CELLS]) -> Option<usize> {
    let mut pos: usize = step(origin, x_dir, y_dir);

    // On a 4x4 torus, repeating any offset comes back to the origin within 4 moves
    for _ in 0..GRID_SIZE {
        if pos == origin {
            return None;
        }
        if !taken[pos] {
            return Some(pos);
        }
        pos = step(pos, x_dir, y_dir);
    }
    None
}

/// Return the rule, the direction, and whether the page changes for the given cell.
fn read_cell(
    symbol: Symbol,
    last_color: Option<Color>,
    page: usize,
    cell: usize,
) -> Result<(Reason, Direction, bool), SolveError> {
    let no_rule = SolveError::NoRule { page, cell, symbol };

    if symbol.is_blank() {
        let color: Color = last_color.ok_or(SolveError::UnsetColor { page, cell })?;
        let direction: Direction = color_direction(color, cell).ok_or(no_rule)?;
        Ok((Reason::Blank { last_color: color }, direction, false))
    } else if symbol.is_arrow() {
        let direction: Direction = arrow_direction(symbol.icon).ok_or(no_rule)?;
        Ok((Reason::Arrow(symbol.icon), direction, false))
    } else {
        let direction: Direction = shape_direction(symbol.icon, symbol.color).ok_or(no_rule)?;
        let reason = Reason::Colored {
            icon: symbol.icon,
            color: symbol.color,
        };
        Ok((reason, direction, true))
    }
}

/// Run the traversal and return the solution cell with the trace.
///
/// # Errors
///
/// The function returns an error only if the rules are inconsistent with the puzzle. This does
/// not happen for puzzles built by [`Puzzle::new`].
pub fn solve(puzzle: &Puzzle) -> Result<Solution, SolveError> {
    let page_count: usize = puzzle.page_count();
    let mut pos: usize = puzzle.start_cell();
    let mut page: usize = 0;
    let mut last_color: Option<Color> = None;
    let mut taken: [bool; CELLS] = [false; CELLS];
    let mut visited: Vec<usize> = Vec::with_capacity(CELLS);
    let mut trace: Vec<TraceStep> = Vec::with_capacity(MAX_STEPS);

    taken[pos] = true;
    visited.push(pos);

    for _ in 0..MAX_STEPS {
        let symbol: Symbol = puzzle.pages()[page].get(pos);
        let (reason, direction, page_switched) = read_cell(symbol, last_color, page, pos)?;
        if let Reason::Colored { color, .. } = reason {
            last_color = Some(color);
        }

        let next: Option<usize> = slide(pos, direction, &taken);
        let trace_step = TraceStep {
            page,
            cell: pos,
            symbol,
            reason,
            direction,
            page_switched,
            next,
        };
        debug!("{trace_step}");
        trace.push(trace_step);

        if page_switched {
            page = (page + 1) % page_count;
        }

        match next {
            Some(c) => {
                pos = c;
                taken[c] = true;
                visited.push(c);
            }
            None => {
                debug!("Solution = {}", cell_name(pos));
                return Ok(Solution {
                    cell: pos,
                    taken: visited,
                    trace,
                });
            }
        }
    }
    Err(SolveError::StepLimit(MAX_STEPS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Page;
    use crate::generator::random_grid::generate;
    use crate::generator::rng::GridRng;
    use proptest::prelude::*;

    fn star_page(cell: usize, color: Color) -> Page {
        let mut page = Page::blank();
        page.set(cell, Symbol::colored(Icon::Star, color));
        page
    }

    #[test]
    fn test_slide_skips_taken_cells() {
        let mut taken = [false; CELLS];
        taken[0] = true;
        taken[1] = true;
        taken[2] = true;
        assert_eq!(slide(0, (1, 0), &taken), Some(3));

        taken[3] = true;
        assert_eq!(slide(0, (1, 0), &taken), None);
    }

    #[test]
    fn test_slide_zero_direction() {
        let taken = [false; CELLS];
        assert_eq!(slide(5, (0, 0), &taken), None);
    }

    #[test]
    fn test_single_page_star_then_blank_gridlock() {
        // Green star goes east, and the green rule at cell 1 is (0, 0)
        let puzzle = Puzzle::new(vec![star_page(0, Color::Green)], 0).unwrap();
        let solution = solve(&puzzle).unwrap();

        assert_eq!(solution.cell, 1);
        assert_eq!(solution.taken, vec![0, 1]);
        assert_eq!(solution.trace.len(), 2);

        let first = solution.trace[0];
        assert_eq!(first.reason, Reason::Colored { icon: Icon::Star, color: Color::Green });
        assert_eq!(first.direction, (1, 0));
        assert!(first.page_switched);
        assert_eq!(first.next, Some(1));

        let last = solution.trace[1];
        assert_eq!(last.reason, Reason::Blank { last_color: Color::Green });
        assert_eq!(last.direction, (0, 0));
        assert!(!last.page_switched);
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_arrow_moves_and_continues() {
        // Green star at A2 (cell 4) goes east to B2 (cell 5) on the second page
        let first = star_page(4, Color::Green);
        let mut second = Page::blank();
        second.set(5, Symbol::arrow(Icon::ArrowE));
        second.set(6, Symbol::arrow(Icon::ArrowS));
        let puzzle = Puzzle::new(vec![first, second], 4).unwrap();

        let solution = solve(&puzzle).unwrap();
        let trace = &solution.trace;

        // Star on page 1 moves to cell 5 and switches to page 2
        assert_eq!(trace[0].next, Some(5));
        assert_eq!(trace[1].page, 1);
        assert_eq!(trace[1].reason, Reason::Arrow(Icon::ArrowE));
        assert_eq!(trace[1].next, Some(6));
        assert!(!trace[1].page_switched);

        // Arrow S from cell 6 reaches cell 10
        assert_eq!(trace[2].cell, 6);
        assert_eq!(trace[2].next, Some(10));

        // Cell 10 is blank, green rule at cell 10 is (1, 0): cell 11
        assert_eq!(trace[3].direction, (1, 0));
        assert_eq!(trace[3].next, Some(11));

        // Cell 11 is blank, green rule at cell 11 is (-1, -1): cell 6 is taken, then cell 1
        assert_eq!(trace[4].direction, (-1, -1));
        assert_eq!(trace[4].next, Some(1));

        // Cell 1 is blank, green rule at cell 1 is (0, 0)
        assert_eq!(trace[5].next, None);
        assert_eq!(solution.cell, 1);
        assert_eq!(solution.taken, vec![4, 5, 6, 10, 11, 1]);
    }

    #[test]
    fn test_page_switch_wraps_to_first_page() {
        // Two pages. Each colored shape switches page.
        // Page 1: blue star at A1 (cell 0) goes west to D1 (cell 3)
        // Page 2: red diamond at D1 goes east to A1, which is taken, then B1 (cell 1)
        // Page 1 again: B1 is blank, red rule at cell 1 is (0, 1): B2 (cell 5)
        // Page 1: B2 is blank, red rule at cell 5 is (0, 0): gridlock
        let first = star_page(0, Color::Blue);
        let mut second = Page::blank();
        second.set(3, Symbol::colored(Icon::Diamond, Color::Red));
        let puzzle = Puzzle::new(vec![first, second], 0).unwrap();

        let solution = solve(&puzzle).unwrap();
        let pages: Vec<usize> = solution.trace.iter().map(|s| s.page).collect();
        assert_eq!(pages, vec![0, 1, 0, 0]);
        assert_eq!(solution.taken, vec![0, 3, 1, 5]);
        assert_eq!(solution.cell, 5);
    }

    #[test]
    fn test_surrounded_cell_is_gridlock() {
        // Blue star at A1 goes west. On page 2, D1 and C1 are arrows W, and B1 is an arrow E.
        let first = star_page(0, Color::Blue);
        let mut second = Page::blank();
        second.set(3, Symbol::arrow(Icon::ArrowW));
        second.set(2, Symbol::arrow(Icon::ArrowW));
        second.set(1, Symbol::arrow(Icon::ArrowE));
        let puzzle = Puzzle::new(vec![first, second], 0).unwrap();

        // A1 -> D1 -> C1 -> B1, then east from B1: C1, D1, A1 are taken, back to B1
        let solution = solve(&puzzle).unwrap();
        assert_eq!(solution.taken, vec![0, 3, 2, 1]);
        assert_eq!(solution.cell, 1);
    }

    #[test]
    fn test_trace_display() {
        let puzzle = Puzzle::new(vec![star_page(0, Color::Green)], 0).unwrap();
        let solution = solve(&puzzle).unwrap();

        assert_eq!(
            solution.trace[0].to_string(),
            "Page 1, A1: Green Star, direction (1, 0), page switch, move to B1"
        );
        assert_eq!(
            solution.trace[1].to_string(),
            "Page 1, B1: Blank with last color Green, direction (0, 0), gridlock"
        );
    }

    #[test]
    fn test_same_seed_same_solution() {
        let a = solve(&generate(&mut GridRng::new(99))).unwrap();
        let b = solve(&generate(&mut GridRng::new(99))).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_traversal_ends_on_taken_cell(seed in any::<u64>()) {
            let puzzle = generate(&mut GridRng::new(seed));
            let solution = solve(&puzzle).unwrap();

            prop_assert!(solution.trace.len() <= MAX_STEPS);
            prop_assert_eq!(solution.trace.len(), solution.taken.len());
            prop_assert!(solution.taken.contains(&solution.cell));
            prop_assert_eq!(solution.taken[0], puzzle.start_cell());
            prop_assert_eq!(*solution.taken.last().unwrap(), solution.cell);

            let mut unique = solution.taken.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), solution.taken.len());
        }
    }
}

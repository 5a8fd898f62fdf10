/*
random_grid.rs

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

//! Generate a random puzzle.
//!
//! Each cell of each page is, with the same probability, a colored shape, an arrow, or a blank
//! cell.
//! On the first page, the random shapes never include the star. Once all the pages are built,
//! a colored star is placed in a random cell of the first page. That cell is the starting cell.

use log::debug;
use thiserror::Error;

use super::grid::{Page, Puzzle, PuzzleError, cell_name};
use super::rng::RngSource;
use super::symbol::{ARROWS, COLORS, Color, Icon, SHAPES, Symbol};
use crate::config::{CELLS, MAX_PAGES, MIN_PAGES};

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    /// Requested number of pages out of range.
    #[error("cannot generate {0} pages: the number of pages must be between 1 and 10")]
    PageCount(usize),

    /// The generated grid does not form a valid puzzle.
    #[error("generated puzzle is not valid: {0}")]
    Invalid(#[from] PuzzleError),
}

/// Draw a random color.
fn random_color(rng: &mut dyn RngSource) -> Color {
    COLORS[rng.next_int(0, COLORS.len())]
}

/// Draw a random cell.
///
/// On the first page, stars are excluded from the colored shapes.
fn random_symbol(rng: &mut dyn RngSource, first_page: bool) -> Symbol {
    match rng.next_int(0, 3) {
        0 => {
            let num_shapes: usize = if first_page {
                SHAPES.len() - 1
            } else {
                SHAPES.len()
            };
            let icon: Icon = SHAPES[rng.next_int(0, num_shapes)];
            Symbol::colored(icon, random_color(rng))
        }
        1 => Symbol::arrow(ARROWS[rng.next_int(0, ARROWS.len())]),
        _ => Symbol::blank(),
    }
}

/// Generate a random puzzle with a random number of pages (between 5 and 10).
pub fn generate(rng: &mut dyn RngSource) -> Puzzle {
    let page_count: usize = rng.next_int(MIN_PAGES, MAX_PAGES + 1);
    match generate_pages(page_count, rng) {
        Ok(puzzle) => puzzle,
        Err(e) => unreachable!("page count drawn in range, and star placed last: {e}"),
    }
}

/// Generate a random puzzle with the given number of pages.
///
/// # Errors
///
/// The function returns an error if the number of pages is not between 1 and 10.
pub fn generate_pages(page_count: usize, rng: &mut dyn RngSource) -> Result<Puzzle, GenerateError> {
    if page_count == 0 || page_count > MAX_PAGES {
        return Err(GenerateError::PageCount(page_count));
    }
    debug!("Number of pages = {page_count}");

    let mut pages: Vec<Page> = Vec::with_capacity(page_count);
    for page_num in 0..page_count {
        let mut page: Page = Page::blank();
        for cell in 0..CELLS {
            page.set(cell, random_symbol(rng, page_num == 0));
        }
        pages.push(page);
    }

    // Place the star on the first page. It might replace any symbol.
    let start_cell: usize = rng.next_int(0, CELLS);
    let star: Symbol = Symbol::colored(Icon::Star, random_color(rng));
    pages[0].set(start_cell, star);
    debug!("Starting cell = {} ({star})", cell_name(start_cell));

    Ok(Puzzle::new(pages, start_cell)?)
}

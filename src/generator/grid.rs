/*
grid.rs

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

//! Pages, puzzles, and cell coordinates.
//!
//! A page is a 4x4 grid of [`Symbol`] objects.
//! Cells are addressed by a flattened index, `row * 4 + column`, that goes from 0 (top left,
//! `A1`) to 15 (bottom right, `D4`).
//! Movements wrap around the edges of the page: leaving through the right edge enters again
//! through the left edge of the same row.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::symbol::{Icon, Symbol};
use crate::config::{CELLS, GRID_SIZE, MAX_PAGES};

/// Type of errors.
#[derive(Error, Debug, PartialEq)]
pub enum PuzzleError {
    /// The puzzle has no pages, or too many.
    #[error("a puzzle needs between 1 and 10 pages, got {0}")]
    PageCount(usize),

    /// Cell index out of the page.
    #[error("cell index {0} is not between 0 and 15")]
    InvalidCell(usize),

    /// Cell name that cannot be parsed.
    #[error("cannot parse cell name `{0}`: expected a column A-D followed by a row 1-4")]
    InvalidCellName(String),

    /// Icon and color do not match.
    #[error("page {page}, cell {cell}: inconsistent symbol {symbol:?}")]
    InvalidSymbol {
        page: usize,
        cell: usize,
        symbol: Symbol,
    },

    /// The starting cell is not a colored star.
    #[error("the starting cell {0} on the first page is not a colored star")]
    StartNotStar(usize),

    /// Page 0 has stars in other cells than the starting cell.
    #[error("the first page has {0} stars instead of one")]
    StarCount(usize),
}

/// Return the column (0 to 3) of a cell.
pub fn column(cell: usize) -> usize {
    cell % GRID_SIZE
}

/// Return the row (0 to 3) of a cell.
pub fn row(cell: usize) -> usize {
    cell / GRID_SIZE
}

/// Return the cell index from its column and row.
pub fn index(column: usize, row: usize) -> usize {
    row * GRID_SIZE + column
}

/// Move from a cell by the given offsets, wrapping around the page edges.
pub fn step(cell: usize, x_dir: i8, y_dir: i8) -> usize {
    let size: isize = GRID_SIZE as isize;
    let c: isize = (column(cell) as isize + x_dir as isize).rem_euclid(size);
    let r: isize = (row(cell) as isize + y_dir as isize).rem_euclid(size);
    index(c as usize, r as usize)
}

/// Return the display name of a cell (`A1` to `D4`).
pub fn cell_name(cell: usize) -> String {
    let c: char = (b'A' + column(cell) as u8) as char;
    format!("{}{}", c, row(cell) + 1)
}

/// Return the cell index from its display name. The column letter is case insensitive.
///
/// # Errors
///
/// The function returns an error if the name is not a column letter followed by a row number.
pub fn parse_cell_name(name: &str) -> Result<usize, PuzzleError> {
    let error = || PuzzleError::InvalidCellName(name.to_string());
    let mut chars = name.trim().chars();
    let c: char = chars.next().ok_or_else(error)?.to_ascii_uppercase();
    let r: char = chars.next().ok_or_else(error)?;
    if chars.next().is_some() {
        return Err(error());
    }
    let column: usize = match c {
        'A'..='D' => c as usize - 'A' as usize,
        _ => return Err(error()),
    };
    let row: usize = match r.to_digit(10) {
        Some(d) if (1..=GRID_SIZE as u32).contains(&d) => d as usize - 1,
        _ => return Err(error()),
    };
    Ok(index(column, row))
}

/// A page of 16 cells.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Page {
    cells: [Symbol; CELLS],
}

impl Page {
    /// Create a [`Page`] object from its cells.
    pub fn new(cells: [Symbol; CELLS]) -> Self {
        Self { cells }
    }

    /// Create a page where all the cells are blank.
    pub fn blank() -> Self {
        Self {
            cells: [Symbol::blank(); CELLS],
        }
    }

    /// Return the symbol of a cell.
    ///
    /// # Panics
    ///
    /// The method panics if the cell index is not lower than 16.
    pub fn get(&self, cell: usize) -> Symbol {
        self.cells[cell]
    }

    /// Replace the symbol of a cell.
    pub(crate) fn set(&mut self, cell: usize, symbol: Symbol) {
        self.cells[cell] = symbol;
    }

    /// Return all the cells.
    pub fn cells(&self) -> &[Symbol; CELLS] {
        &self.cells
    }

    /// Return the number of cells holding the given icon.
    pub fn count_icon(&self, icon: Icon) -> usize {
        self.cells.iter().filter(|s| s.icon == icon).count()
    }
}

/// Serialized form of a [`Puzzle`], validated on deserialization.
#[derive(Deserialize)]
struct RawPuzzle {
    pages: Vec<Page>,
    start_cell: usize,
}

impl TryFrom<RawPuzzle> for Puzzle {
    type Error = PuzzleError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        Puzzle::new(raw.pages, raw.start_cell)
    }
}

/// Puzzle object: the pages and the starting cell.
///
/// The object cannot be modified after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawPuzzle")]
pub struct Puzzle {
    pages: Vec<Page>,
    start_cell: usize,
}

impl Puzzle {
    /// Create a [`Puzzle`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if the number of pages is out of range, if a cell holds an
    /// inconsistent symbol, or if the starting cell is not the only star of the first page.
    pub fn new(pages: Vec<Page>, start_cell: usize) -> Result<Self, PuzzleError> {
        if pages.is_empty() || pages.len() > MAX_PAGES {
            return Err(PuzzleError::PageCount(pages.len()));
        }
        if start_cell >= CELLS {
            return Err(PuzzleError::InvalidCell(start_cell));
        }
        for (page, p) in pages.iter().enumerate() {
            if let Some((cell, symbol)) = p.cells().iter().enumerate().find(|(_, s)| !s.is_valid())
            {
                return Err(PuzzleError::InvalidSymbol {
                    page,
                    cell,
                    symbol: *symbol,
                });
            }
        }
        if pages[0].get(start_cell).icon != Icon::Star {
            return Err(PuzzleError::StartNotStar(start_cell));
        }
        let stars: usize = pages[0].count_icon(Icon::Star);
        if stars != 1 {
            return Err(PuzzleError::StarCount(stars));
        }
        Ok(Self { pages, start_cell })
    }

    /// Return the pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Return the given page.
    pub fn page(&self, page: usize) -> Option<&Page> {
        self.pages.get(page)
    }

    /// Return the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Return the index of the star cell on the first page.
    pub fn start_cell(&self) -> usize {
        self.start_cell
    }
}

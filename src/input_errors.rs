/*
input_errors.rs

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

//! Manage the player's mistake counter.
//!
//! Every wrong guess is a mistake. The counter is reported to the host when the player solves the
//! puzzle.

use log::debug;

use serde::{Deserialize, Serialize};

/// Manage the mistake counter.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputErrors {
    // Number of errors.
    count: usize,

    // Cells that the player wrongly guessed, in the order of the guesses. A cell appears once even
    // if the player guessed it several times.
    cells: Vec<usize>,
}

impl InputErrors {
    /// Create an [`InputErrors`] object.
    pub fn new() -> Self {
        Self {
            count: 0,
            cells: Vec::new(),
        }
    }

    /// Return the number of mistakes.
    pub fn get_errors(&self) -> usize {
        self.count
    }

    /// Return the cells that have been wrongly guessed.
    pub fn get_cells(&self) -> &[usize] {
        &self.cells
    }

    /// Record a wrong guess.
    pub fn add_cell(&mut self, cell_id: usize) {
        self.count += 1;
        if !self.cells.contains(&cell_id) {
            self.cells.push(cell_id);
        }
        debug!("Error for cell {cell_id}: error count + 1 = {}", self.count);
    }
}

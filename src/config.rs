/*
config.rs

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

//! Build-time settings.

/// Number of columns and rows in a page.
pub const GRID_SIZE: usize = 4;

/// Number of cells in a page.
pub const CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Smallest number of pages in a generated puzzle.
pub const MIN_PAGES: usize = 5;

/// Largest number of pages in a puzzle.
pub const MAX_PAGES: usize = 10;

/// Name of the file that stores a game in progress.
pub const SAVE_FILE_NAME: &str = "savegame.json";

/// Text displayed by `gridlock --version` in its long form.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

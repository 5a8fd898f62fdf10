/*
generator.rs

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

//! Generate random puzzles and find their solution.
//!
//! A [`grid::Puzzle`] object is a list of 4x4 pages (see [`grid::Page`]) where each cell holds
//! a [`symbol::Symbol`], plus the starting cell: the star on the first page.
//!
//! To play, a random puzzle must be created and solved:
//!
//! * [`random_grid::generate`] builds a random puzzle from a random source
//!   ([`rng::RngSource`]).
//!   Use a [`rng::GridRng`] object to get a puzzle that can be built again from its seed.
//!
//! * [`traversal::solve`] follows the movement rules from [`rules`] until the traversal is
//!   stuck, and returns the solution cell, as well as the trace of the visited cells.

pub mod grid;
pub mod random_grid;
pub mod rng;
pub mod rules;
pub mod symbol;
pub mod traversal;

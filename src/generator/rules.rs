/*
rules.rs

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

//! Movement rules.
//!
//! The direction taken from a cell is given by one of three tables:
//!
//! * Colored shapes use [`SHAPE_DIRECTIONS`], indexed by the shape and its color.
//! * Arrows use [`ARROW_DIRECTIONS`].
//! * Blank cells use [`COLOR_DIRECTIONS`], indexed by the last collected color and by the
//!   position of the blank cell in the page.
//!
//! The tables are the rules of the puzzle. They are not derived from any formula.
//! A direction is an `(x, y)` offset where `x` grows to the right and `y` grows downward.

use super::symbol::{Color, Icon};
use crate::config::CELLS;

/// Column and row offsets.
pub type Direction = (i8, i8);

/// Directions for the blank cells, per last collected color (green, yellow, red, blue) and per
/// cell index.
#[rustfmt::skip]
pub const COLOR_DIRECTIONS: [[Direction; CELLS]; 4] = [
    // Green
    [
        ( 1,  0), ( 0,  0), ( 0,  1), (-1,  1),
        ( 0, -1), ( 1,  1), (-1,  0), ( 0,  1),
        ( 1, -1), ( 0,  0), ( 1,  0), (-1, -1),
        ( 0, -1), ( 1,  0), (-1,  1), ( 0,  0),
    ],
    // Yellow
    [
        ( 0,  1), (-1,  0), ( 1,  1), ( 0,  0),
        ( 1,  0), ( 0, -1), (-1, -1), ( 1, -1),
        ( 0,  0), (-1,  1), ( 0,  1), ( 1,  0),
        (-1,  0), ( 0,  0), ( 1, -1), ( 0, -1),
    ],
    // Red
    [
        (-1, -1), ( 0,  1), ( 0,  0), ( 1,  0),
        (-1,  1), ( 0,  0), ( 1, -1), ( 0, -1),
        ( 1,  1), (-1,  0), ( 0,  0), ( 0,  1),
        ( 1,  0), (-1, -1), ( 0,  1), (-1,  0),
    ],
    // Blue
    [
        ( 0,  0), ( 1,  1), (-1,  0), ( 0, -1),
        ( 1, -1), ( 0,  1), ( 0,  0), (-1,  1),
        ( 0, -1), ( 1,  0), (-1, -1), ( 0,  0),
        ( 1,  1), ( 0,  1), (-1,  0), ( 1,  0),
    ],
];

/// Directions for the colored shapes, per shape (triangle, diamond, hexagon, star) and per color
/// (green, yellow, red, blue).
#[rustfmt::skip]
pub const SHAPE_DIRECTIONS: [[Direction; 4]; 4] = [
    // Triangle
    [( 0, -1), ( 1,  1), (-1,  0), ( 1, -1)],
    // Diamond
    [(-1,  1), ( 0,  1), ( 1,  0), (-1, -1)],
    // Hexagon
    [( 1,  1), (-1, -1), ( 0, -1), (-1,  1)],
    // Star
    [( 1,  0), (-1,  1), ( 0,  1), (-1,  0)],
];

/// Directions for the arrows (N, NW, W, SW, S, SE, E, NE).
#[rustfmt::skip]
pub const ARROW_DIRECTIONS: [Direction; 8] = [
    ( 0, -1), (-1, -1), (-1,  0), (-1,  1),
    ( 0,  1), ( 1,  1), ( 1,  0), ( 1, -1),
];

/// Index of a non-blank color in the tables.
fn color_index(color: Color) -> Option<usize> {
    match color {
        Color::Blank => None,
        c => Some(c as usize - 1),
    }
}

/// Direction for a blank cell, given the last collected color.
///
/// Return `None` for [`Color::Blank`] or for a cell index out of the page.
pub fn color_direction(color: Color, cell: usize) -> Option<Direction> {
    COLOR_DIRECTIONS.get(color_index(color)?)?.get(cell).copied()
}

/// Direction for a colored shape.
///
/// Return `None` if the icon is not a shape or if the color is blank.
pub fn shape_direction(icon: Icon, color: Color) -> Option<Direction> {
    let i: usize = match icon {
        Icon::Triangle => 0,
        Icon::Diamond => 1,
        Icon::Hexagon => 2,
        Icon::Star => 3,
        _ => return None,
    };
    Some(SHAPE_DIRECTIONS[i][color_index(color)?])
}

/// Direction for an arrow.
///
/// Return `None` if the icon is not an arrow.
pub fn arrow_direction(icon: Icon) -> Option<Direction> {
    if !icon.is_arrow() {
        return None;
    }
    ARROW_DIRECTIONS
        .get(icon as usize - Icon::ArrowN as usize)
        .copied()
}

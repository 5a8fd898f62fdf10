/*
symbol.rs

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

//! Cell symbols: an icon and a color.
//!
//! Three kinds of cells exist in a page:
//!
//! * Colored cells, with a shape icon ([`Icon::Triangle`], [`Icon::Diamond`], [`Icon::Hexagon`],
//!   or [`Icon::Star`]) and a non-blank color.
//! * Arrow cells, with one of the eight compass arrows. The color is always [`Color::Blank`].
//! * Blank cells, with [`Icon::None`] and [`Color::Blank`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Icon component of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Icon {
    #[default]
    None,
    Triangle,
    Diamond,
    Hexagon,
    Star,
    ArrowN,
    ArrowNW,
    ArrowW,
    ArrowSW,
    ArrowS,
    ArrowSE,
    ArrowE,
    ArrowNE,
}

/// Shape icons, in the order used when drawing them from the random source.
pub const SHAPES: [Icon; 4] = [Icon::Triangle, Icon::Diamond, Icon::Hexagon, Icon::Star];

/// Arrow icons, in the order used when drawing them from the random source.
pub const ARROWS: [Icon; 8] = [
    Icon::ArrowN,
    Icon::ArrowNW,
    Icon::ArrowW,
    Icon::ArrowSW,
    Icon::ArrowS,
    Icon::ArrowSE,
    Icon::ArrowE,
    Icon::ArrowNE,
];

impl Icon {
    /// Whether the icon is one of the eight arrows.
    pub fn is_arrow(self) -> bool {
        self as u8 >= Icon::ArrowN as u8
    }

    /// Whether the icon is a shape that carries a color.
    pub fn is_shape(self) -> bool {
        SHAPES.contains(&self)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Icon::None => write!(f, "None"),
            Icon::Triangle => write!(f, "Triangle"),
            Icon::Diamond => write!(f, "Diamond"),
            Icon::Hexagon => write!(f, "Hexagon"),
            Icon::Star => write!(f, "Star"),
            Icon::ArrowN => write!(f, "Arrow N"),
            Icon::ArrowNW => write!(f, "Arrow NW"),
            Icon::ArrowW => write!(f, "Arrow W"),
            Icon::ArrowSW => write!(f, "Arrow SW"),
            Icon::ArrowS => write!(f, "Arrow S"),
            Icon::ArrowSE => write!(f, "Arrow SE"),
            Icon::ArrowE => write!(f, "Arrow E"),
            Icon::ArrowNE => write!(f, "Arrow NE"),
        }
    }
}

/// Color component of a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Blank,
    Green,
    Yellow,
    Red,
    Blue,
}

/// Non-blank colors, in the order used when drawing them from the random source.
pub const COLORS: [Color; 4] = [Color::Green, Color::Yellow, Color::Red, Color::Blue];

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Blank => write!(f, "Blank"),
            Color::Green => write!(f, "Green"),
            Color::Yellow => write!(f, "Yellow"),
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// Symbol displayed in a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Symbol {
    pub icon: Icon,
    pub color: Color,
}

impl Symbol {
    /// Create a blank cell.
    pub const fn blank() -> Self {
        Self {
            icon: Icon::None,
            color: Color::Blank,
        }
    }

    /// Create a colored shape cell.
    pub const fn colored(icon: Icon, color: Color) -> Self {
        Self { icon, color }
    }

    /// Create an arrow cell. Arrows do not carry a color.
    pub const fn arrow(icon: Icon) -> Self {
        Self {
            icon,
            color: Color::Blank,
        }
    }

    /// Whether the cell is blank.
    pub fn is_blank(&self) -> bool {
        self.icon == Icon::None
    }

    /// Whether the cell holds an arrow.
    pub fn is_arrow(&self) -> bool {
        self.icon.is_arrow()
    }

    /// Whether the cell holds a colored shape.
    pub fn is_colored(&self) -> bool {
        self.icon.is_shape()
    }

    /// Whether the icon and the color are consistent.
    ///
    /// Blank cells and arrows have no color, and shapes always have one.
    pub fn is_valid(&self) -> bool {
        if self.is_colored() {
            self.color != Color::Blank
        } else {
            self.color == Color::Blank
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_blank() {
            write!(f, "Blank")
        } else if self.is_arrow() {
            write!(f, "{}", self.icon)
        } else {
            write!(f, "{} {}", self.color, self.icon)
        }
    }
}

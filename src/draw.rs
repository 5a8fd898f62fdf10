/*
draw.rs

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

//! Draw puzzle pages as text for the command line.
//!
//! Each cell is drawn on three characters:
//!
//! * Colored shapes: color initial and shape initial (`GS` for a green star, `RD` for a red
//!   diamond).
//! * Arrows: the arrow character.
//! * Blank cells: a dot.

use std::fmt::Write;

use crate::config::GRID_SIZE;
use crate::generator::grid::{Page, index};
use crate::generator::symbol::{Color, Icon, Symbol};

/// Return the text for a cell.
pub fn cell_text(symbol: Symbol) -> &'static str {
    match (symbol.icon, symbol.color) {
        (Icon::None, _) => " . ",
        (Icon::ArrowN, _) => " ↑ ",
        (Icon::ArrowNW, _) => " ↖ ",
        (Icon::ArrowW, _) => " ← ",
        (Icon::ArrowSW, _) => " ↙ ",
        (Icon::ArrowS, _) => " ↓ ",
        (Icon::ArrowSE, _) => " ↘ ",
        (Icon::ArrowE, _) => " → ",
        (Icon::ArrowNE, _) => " ↗ ",
        (Icon::Triangle, Color::Green) => " GT",
        (Icon::Triangle, Color::Yellow) => " YT",
        (Icon::Triangle, Color::Red) => " RT",
        (Icon::Triangle, Color::Blue) => " BT",
        (Icon::Diamond, Color::Green) => " GD",
        (Icon::Diamond, Color::Yellow) => " YD",
        (Icon::Diamond, Color::Red) => " RD",
        (Icon::Diamond, Color::Blue) => " BD",
        (Icon::Hexagon, Color::Green) => " GH",
        (Icon::Hexagon, Color::Yellow) => " YH",
        (Icon::Hexagon, Color::Red) => " RH",
        (Icon::Hexagon, Color::Blue) => " BH",
        (Icon::Star, Color::Green) => " GS",
        (Icon::Star, Color::Yellow) => " YS",
        (Icon::Star, Color::Red) => " RS",
        (Icon::Star, Color::Blue) => " BS",
        (_, Color::Blank) => " ? ",
    }
}

/// Draw a page with its column letters and row numbers.
pub fn draw_page(page: &Page, page_number: usize, total_pages: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Page {page_number}/{total_pages}");
    out.push_str("  ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, "  {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "{} ", r + 1);
        for c in 0..GRID_SIZE {
            out.push_str(cell_text(page.get(index(c, r))));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_page() {
        let mut page = Page::blank();
        page.set(0, Symbol::colored(Icon::Star, Color::Green));
        page.set(6, Symbol::arrow(Icon::ArrowE));
        page.set(15, Symbol::colored(Icon::Diamond, Color::Red));

        let text = draw_page(&page, 1, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Page 1/5");
        assert_eq!(lines[1], "    A  B  C  D");
        assert_eq!(lines[2], "1  GS .  .  . ");
        assert_eq!(lines[3], "2  .  .  →  . ");
        assert_eq!(lines[5], "4  .  .  .  RD");
    }

    #[test]
    fn test_cell_text_width() {
        for icon in 0..13u8 {
            let icon = Icon::from_repr(icon).unwrap();
            for color in 0..5u8 {
                let color = Color::from_repr(color).unwrap();
                assert_eq!(cell_text(Symbol { icon, color }).chars().count(), 3);
            }
        }
    }
}

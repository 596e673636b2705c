// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Colour palette for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    /// Also painted onto the emulator itself, see [`crate::util::term`].
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) input_colour: Color,
    pub(crate) hint_colour: Color,
    pub(crate) warning_colour: Color,

    pub(crate) table_index_fg: Color,
    pub(crate) table_name_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 30, 60),
            input_colour: Color::Rgb(255, 255, 255),
            hint_colour: Color::Rgb(162, 161, 166),
            warning_colour: Color::Rgb(239, 83, 80),

            table_index_fg: Color::Rgb(162, 161, 166),
            table_name_fg: Color::Rgb(255, 255, 255),
        }
    }
}

impl Theme {
    /// `#rrggbb` form of an RGB colour, as expected by OSC 11. Named and
    /// indexed colours have no fixed value and give `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_as_hex() {
        assert_eq!(
            Theme::to_hex(Theme::default().background_colour).as_deref(),
            Some("#281432")
        );
    }

    #[test]
    fn named_colour_has_no_hex() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}

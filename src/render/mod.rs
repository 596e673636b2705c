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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework.
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event, including the periodic tick.

mod footer;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    playlist::PlayerWidget,
    render::{footer::draw_footer, player::draw_player},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the playlist, the player status
/// pane, the search input and the footer.
///
/// The playlist view records its row area while drawing so mouse clicks can
/// be mapped back to entries, hence the mutable borrow of `app`.
pub(crate) fn draw<P: PlayerWidget>(f: &mut Frame, app: &mut App<P>) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let theme = app.theme;
    let query = app.search_bar.submitted().to_string();
    app.playlist
        .renderer_mut()
        .draw(f, outer[0], &query, &theme);

    draw_player(f, outer[1], app);

    app.search_bar.draw(f, outer[2], &app.theme);

    draw_footer(f, outer[3], app);
}

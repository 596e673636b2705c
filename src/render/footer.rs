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

//! Render the footer line: either key hints or the delete confirmation.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::{App, playlist::PlayerWidget};

const GLOBAL_HINT: &str = "/ search | d delete | r reload | q quit";

pub(crate) fn draw_footer<P: PlayerWidget>(f: &mut Frame, area: Rect, app: &App<P>) {
    let block = Block::default().padding(Padding::horizontal(1));

    let line = match &app.delete_prompt {
        Some(prompt) => Line::from(vec![
            Span::styled(
                format!("Delete \"{}\"? ", prompt.name),
                Style::default()
                    .fg(app.theme.warning_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "y to confirm, any other key cancels",
                Style::default().fg(app.theme.hint_colour),
            ),
        ]),
        None => Line::from(Span::styled(
            format!("{} | {}", app.keymap.hint(), GLOBAL_HINT),
            Style::default().fg(app.theme.hint_colour),
        )),
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{components::SearchBar, theme::Theme};

const PROMPT: &str = "/";

impl SearchBar {
    /// Renders the input on a single line, placing the terminal cursor in it
    /// while focused.
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let container = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PROMPT.len() as u16), Constraint::Min(1)])
            .horizontal_margin(1)
            .split(area);

        let style = Style::default()
            .fg(theme.input_colour)
            .bg(theme.gauge_track_colour);

        f.render_widget(Paragraph::new(PROMPT).style(style), container[0]);
        f.render_widget(Paragraph::new(self.input.value()).style(style), container[1]);

        if self.active {
            let cursor_x = container[1].x + self.input.visual_cursor() as u16;
            let cursor_y = container[1].y;
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

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

//! UI rendering logic for the playlist view.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{components::PlaylistView, render::icons::ICON_PLAY, theme::Theme};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, query: &str, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format!("Playlist | {} videos", self.len());
        if !query.is_empty() {
            let _ = write!(header_text, " | matching \"{}\"", query);
        }

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        self.rows_area = chunks[1];
        self.draw_rows(f, chunks[1], theme);
    }

    fn draw_rows(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.entries.iter().enumerate().map(|(index, name)| {
            let is_active = self.active == Some(index);

            let marker = if is_active { ICON_PLAY } else { "" };
            let name_style = if is_active {
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.table_name_fg)
            };

            Row::new(vec![
                Cell::from(Line::from(marker).style(Style::default().fg(theme.accent_colour))),
                Cell::from(
                    Line::from(format!("{}", index + 1))
                        .style(Style::default().fg(theme.table_index_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(name.as_str()).style(name_style)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Min(0),
            ],
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

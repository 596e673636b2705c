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

//! Render the video player status pane.
//!
//! Shows the active video, elapsed and remaining time, the volume and a
//! progress bar. The video itself plays in the libmpv window.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    playlist::PlayerWidget,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    theme::Theme,
    util::format::format_time,
};

const MAX_VOLUME: f64 = 130.0;

pub(crate) fn draw_player<P: PlayerWidget>(f: &mut Frame, area: Rect, app: &App<P>) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    // mpv reports the media title once loaded, until then show the list name
    let title = app
        .player_title
        .as_deref()
        .or_else(|| app.playlist.current_item().map(|item| item.display_name.as_str()));

    if let Some(title) = title {
        let icon = match app.player_state {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Stopped => ICON_STOP,
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", icon), bold).fg(Color::White),
            Span::styled(title, bold).fg(app.theme.accent_colour),
        ];
        if let Some(index) = app.playlist.current_index() {
            spans.push(Span::styled(
                format!("  [{}/{}]", index + 1, app.playlist.items().len()),
                Style::default().fg(app.theme.hint_colour),
            ));
        }
        let title_line = Line::from(spans);
        f.render_widget(Paragraph::new(title_line), info_chunks[0]);

        let duration = app.player_duration.unwrap_or(0);
        let time = app.player_time.unwrap_or(0);
        let remaining = duration.saturating_sub(time);

        let time_line = Line::from(vec![
            Span::styled(format_time(time), bold).fg(app.theme.accent_colour),
            Span::styled(" / ", bold).fg(Color::White),
            Span::styled(format_time(duration), bold).fg(app.theme.accent_colour),
            Span::styled(" (-", bold).fg(Color::White),
            Span::styled(format_time(remaining), bold).fg(app.theme.accent_colour),
            Span::styled(")", bold).fg(Color::White),
        ]);
        f.render_widget(
            Paragraph::new(time_line).alignment(Alignment::Right),
            info_chunks[1],
        );
    }

    let position_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(16),
            Constraint::Length(6),
        ])
        .split(chunks[2]);

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);
    f.render_widget(gauge(&app.theme, position), position_chunks[0]);

    let vol_ratio = (app.volume.unwrap_or(0) as f64 / MAX_VOLUME).clamp(0.0, 1.0);
    f.render_widget(gauge(&app.theme, vol_ratio), position_chunks[2]);

    let volume_label = Paragraph::new(format!(" {}%", (vol_ratio * MAX_VOLUME) as u16))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, position_chunks[3]);
}

fn gauge(theme: &Theme, ratio: f64) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true)
}

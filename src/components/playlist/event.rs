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

//! Input handling for the playlist pane.
//!
//! Keyboard events move the cursor; `Enter` and a left click activate an
//! entry, which the caller turns into a selection on the playlist.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::components::{PlaylistView, PlaylistViewAction};

impl PlaylistView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PlaylistViewAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(),

                KeyCode::Enter => return self.cursor().map(PlaylistViewAction::Activate),

                _ => {}
            },

            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    if let Some(index) = self.entry_at(mouse_event.column, mouse_event.row) {
                        self.table_state.select(Some(index));
                        return Some(PlaylistViewAction::Activate(index));
                    }
                }
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    use super::*;
    use crate::playlist::PlaylistRenderer;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn view() -> PlaylistView {
        let mut view = PlaylistView::new();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            view.append_entry(i, name);
        }
        view.rows_area = Rect::new(0, 2, 20, 5);
        view
    }

    #[test]
    fn enter_activates_cursor() {
        let mut view = view();

        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);

        view.process_event(&key(KeyCode::Char('j')));
        view.process_event(&key(KeyCode::Char('j')));

        assert_eq!(
            view.process_event(&key(KeyCode::Enter)),
            Some(PlaylistViewAction::Activate(1))
        );
    }

    #[test]
    fn click_activates_row() {
        let mut view = view();

        assert_eq!(
            view.process_event(&click(4, 4)),
            Some(PlaylistViewAction::Activate(2))
        );
        assert_eq!(view.cursor(), Some(2));
        assert_eq!(view.process_event(&click(4, 6)), None);
    }
}

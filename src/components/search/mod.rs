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

//! Title search input.
//!
//! `/` focuses the input, `Enter` submits the (possibly empty) query and `Esc`
//! abandons typing. The last submitted query is remembered for the playlist
//! header.

mod render;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchBarAction {
    Submit(String),
    Cancel,
}

pub(crate) struct SearchBar {
    active: bool,
    input: Input,
    submitted: String,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            submitted: String::new(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// The query behind the playlist currently shown.
    pub(crate) fn submitted(&self) -> &str {
        &self.submitted
    }

    /// Forgets both the typed text and the submitted query.
    pub(crate) fn reset(&mut self) {
        self.active = false;
        self.input.reset();
        self.submitted.clear();
    }

    /// Handles an input event, returning whether it was consumed.
    ///
    /// While inactive only the focus key is consumed. While active every key
    /// event is consumed so that typing never triggers global bindings.
    pub(crate) fn handle_event(&mut self, event: &Event) -> (bool, Option<SearchBarAction>) {
        let Event::Key(key_event) = event else {
            return (false, None);
        };

        if !self.active {
            if key_event.code == KeyCode::Char('/') {
                self.active = true;
                return (true, None);
            }
            return (false, None);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input = Input::new(self.submitted.clone());
                (true, Some(SearchBarAction::Cancel))
            }

            KeyCode::Enter => {
                self.active = false;
                let query = self.input.value().trim().to_string();
                self.submitted = query.clone();
                (true, Some(SearchBarAction::Submit(query)))
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                (true, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(bar: &mut SearchBar, text: &str) {
        for c in text.chars() {
            bar.handle_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn ignores_keys_until_focused() {
        let mut bar = SearchBar::new();

        assert_eq!(bar.handle_event(&key(KeyCode::Char('n'))), (false, None));
        assert_eq!(bar.handle_event(&key(KeyCode::Char('/'))), (true, None));
        assert!(bar.active());
    }

    #[test]
    fn submits_trimmed_query() {
        let mut bar = SearchBar::new();
        bar.handle_event(&key(KeyCode::Char('/')));
        type_text(&mut bar, " cats ");

        let (consumed, action) = bar.handle_event(&key(KeyCode::Enter));

        assert!(consumed);
        assert_eq!(action, Some(SearchBarAction::Submit("cats".to_string())));
        assert_eq!(bar.submitted(), "cats");
        assert!(!bar.active());
    }

    #[test]
    fn empty_submit_is_allowed() {
        let mut bar = SearchBar::new();
        bar.handle_event(&key(KeyCode::Char('/')));

        let (_, action) = bar.handle_event(&key(KeyCode::Enter));

        assert_eq!(action, Some(SearchBarAction::Submit(String::new())));
    }

    #[test]
    fn escape_restores_submitted_query() {
        let mut bar = SearchBar::new();
        bar.handle_event(&key(KeyCode::Char('/')));
        type_text(&mut bar, "dog");
        bar.handle_event(&key(KeyCode::Enter));

        bar.handle_event(&key(KeyCode::Char('/')));
        type_text(&mut bar, "zzz");
        let (_, action) = bar.handle_event(&key(KeyCode::Esc));

        assert_eq!(action, Some(SearchBarAction::Cancel));
        assert_eq!(bar.input.value(), "dog");
        assert_eq!(bar.submitted(), "dog");
    }
}

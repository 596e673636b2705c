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

//! Playlist pane state.
//!
//! This module keeps the rows shown in the playlist pane, the marker for the
//! active video, and a keyboard cursor that is independent from the active
//! video until the user activates it.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::TableState};

use crate::playlist::PlaylistRenderer;

/// Outcome of an input event handled by the playlist pane.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PlaylistViewAction {
    /// The entry at this index was clicked or activated with `Enter`.
    Activate(usize),
}

pub(crate) struct PlaylistView {
    entries: Vec<String>,
    active: Option<usize>,
    table_state: TableState,
    /// Area the rows were last drawn into, for mouse hit testing.
    rows_area: Rect,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![],
            active: None,
            table_state: TableState::new(),
            rows_area: Rect::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn goto_next(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.entries.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }

    /// Resolves a terminal cell to the index of the entry drawn there.
    pub(crate) fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.rows_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }

        let index = self.table_state.offset() + (row - area.y) as usize;
        (index < self.entries.len()).then_some(index)
    }
}

impl PlaylistRenderer for PlaylistView {
    fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
        self.table_state = TableState::new();
    }

    fn append_entry(&mut self, index: usize, name: &str) {
        debug_assert_eq!(index, self.entries.len());
        self.entries.push(name.to_string());
    }

    fn mark_active(&mut self, index: usize) {
        if index < self.entries.len() {
            self.active = Some(index);
        }
    }

    fn scroll_offset(&self) -> usize {
        self.table_state.offset()
    }

    fn visible_rows(&self) -> usize {
        self.rows_area.height as usize
    }

    // The cursor follows, otherwise the table would scroll back to it on the
    // next draw. The offset stops where the last entry fills the last row.
    fn scroll_into_view(&mut self, index: usize) {
        let max_offset = self.entries.len().saturating_sub(self.visible_rows());
        *self.table_state.offset_mut() = index.min(max_offset);
        self.table_state.select(Some(index));
    }
}

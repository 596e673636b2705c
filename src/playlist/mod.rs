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

//! Playlist cursor and player synchronisation.
//!
//! The [`PlaylistController`] owns the list of [`MediaDescriptor`]s currently
//! loaded and a cursor to the active item. It never touches the terminal or
//! the player directly, instead it drives two seams:
//!
//! * [`PlaylistRenderer`]: the visual list of entries (the playlist pane).
//! * [`PlayerWidget`]: the playback engine that is told which sources to load.
//!
//! Moving past either end of the list is a silent no-op, the cursor saturates
//! at the first and last entries.

#[cfg(test)]
pub(crate) mod fakes;
mod guard;

use anyhow::Result;
use tracing::{debug, trace};

pub(crate) use guard::SetupGuard;

use crate::{
    keymap::{Keymap, PlaylistAction},
    model::{MediaDescriptor, MediaSource},
};

/// Visual side of the playlist.
pub(crate) trait PlaylistRenderer {
    /// Removes every entry.
    fn clear(&mut self);

    /// Appends an entry; entries are appended in index order.
    fn append_entry(&mut self, index: usize, name: &str);

    /// Marks the entry at `index` as the active one, un-marking any other.
    fn mark_active(&mut self, index: usize);

    /// Index of the first visible entry.
    fn scroll_offset(&self) -> usize;

    /// How many entries fit on screen, zero until the list has been laid out.
    fn visible_rows(&self) -> usize;

    /// Scrolls so that the entry at `index` is visible.
    fn scroll_into_view(&mut self, index: usize);
}

/// The playback engine as seen by the playlist.
pub(crate) trait PlayerWidget {
    fn load_sources(&self, sources: &[MediaSource]) -> Result<()>;

    fn toggle_pause(&self) -> Result<()>;

    /// Seeks relative to the current position, in seconds.
    fn seek(&self, delta: i32) -> Result<()>;

    fn stop(&self) -> Result<()>;

    fn adjust_volume(&self, delta: i32) -> Result<()>;

    fn toggle_mute(&self) -> Result<()>;
}

pub(crate) struct PlaylistController<R, P> {
    items: Vec<MediaDescriptor>,
    current_index: Option<usize>,
    /// Bumped every time an item is handed to the player.
    activations: u64,
    scroll_threshold: usize,
    renderer: R,
    player: P,
}

impl<R: PlaylistRenderer, P: PlayerWidget> PlaylistController<R, P> {
    pub(crate) fn new(renderer: R, player: P, scroll_threshold: usize) -> Self {
        Self {
            items: vec![],
            current_index: None,
            activations: 0,
            scroll_threshold,
            renderer,
            player,
        }
    }

    /// Registers the global playlist bindings with `keymap`.
    ///
    /// Only the first call for a given `guard` has any effect, registering
    /// twice would make every binding fire twice.
    pub(crate) fn initialize(&self, keymap: &mut Keymap, guard: &mut SetupGuard) -> bool {
        guard.run_once(|| {
            keymap.register_playlist_bindings();
            debug!("Registered playlist key bindings");
        })
    }

    /// Replaces the playlist with `items` and activates the first entry.
    pub(crate) fn load(&mut self, items: Vec<MediaDescriptor>) -> Result<()> {
        debug!(previous = self.items.len(), count = items.len(), "Loading playlist");

        self.renderer.clear();
        for (index, item) in items.iter().enumerate() {
            self.renderer.append_entry(index, &item.display_name);
        }

        self.items = items;
        self.current_index = if self.items.is_empty() { None } else { Some(0) };

        self.set_active(self.current_index)
    }

    /// Advances to the next entry, returning whether the cursor moved.
    pub(crate) fn play_next(&mut self) -> Result<bool> {
        match self.current_index {
            Some(index) if index + 1 < self.items.len() => {
                self.current_index = Some(index + 1);
                self.set_active(self.current_index)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Retreats to the previous entry, returning whether the cursor moved.
    pub(crate) fn play_previous(&mut self) -> Result<bool> {
        match self.current_index {
            Some(index) if index > 0 => {
                self.current_index = Some(index - 1);
                self.set_active(self.current_index)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Equivalent of clicking the entry at `index`.
    pub(crate) fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            trace!(index, "Ignoring selection outside the playlist");
            return Ok(());
        }

        self.current_index = Some(index);
        self.set_active(Some(index))
    }

    /// Hands the sources at `index` to the player and highlights the entry.
    ///
    /// Does nothing when `index` is absent or outside the playlist.
    pub(crate) fn set_active(&mut self, index: Option<usize>) -> Result<()> {
        let Some((index, item)) = index.and_then(|i| self.items.get(i).map(|item| (i, item))) else {
            return Ok(());
        };

        debug!(index, name = %item.display_name, "Setting active item");
        self.player.load_sources(&item.sources)?;
        self.activations += 1;

        self.renderer.mark_active(index);

        // The threshold never reaches past the rows actually on screen.
        let window = match self.renderer.visible_rows() {
            0 => self.scroll_threshold,
            rows => rows.min(self.scroll_threshold),
        };
        let offset = self.renderer.scroll_offset();
        if index < offset || index >= offset + window {
            self.renderer.scroll_into_view(index);
        }

        Ok(())
    }

    /// Re-applies the active marker to the current entry.
    pub(crate) fn highlight_active(&mut self) {
        if let Some(index) = self.current_index {
            self.renderer.mark_active(index);
        }
    }

    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.player.toggle_pause()
    }

    pub(crate) fn perform(&mut self, action: PlaylistAction) -> Result<()> {
        match action {
            PlaylistAction::TogglePause => self.toggle_pause()?,
            PlaylistAction::Next => {
                self.play_next()?;
            }
            PlaylistAction::Previous => {
                self.play_previous()?;
            }
            PlaylistAction::HighlightActive => self.highlight_active(),
        }

        Ok(())
    }

    pub(crate) fn items(&self) -> &[MediaDescriptor] {
        &self.items
    }

    pub(crate) fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Count of items handed to the player so far, a change means the active
    /// media was replaced.
    pub(crate) fn activations(&self) -> u64 {
        self.activations
    }

    pub(crate) fn current_item(&self) -> Option<&MediaDescriptor> {
        self.current_index.and_then(|i| self.items.get(i))
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &R {
        &self.renderer
    }

    pub(crate) fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub(crate) fn player(&self) -> &P {
        &self.player
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::*;
    use crate::{
        keymap::PlayerSignal,
        playlist::fakes::{FakePlayer, FakeRenderer, item},
    };

    fn controller(names: &[&str]) -> PlaylistController<FakeRenderer, FakePlayer> {
        let mut controller = PlaylistController::new(FakeRenderer::default(), FakePlayer::default(), 10);
        controller.load(names.iter().map(|n| item(n)).collect()).unwrap();
        controller
    }

    #[test]
    fn load_activates_first_item() {
        let controller = controller(&["A", "B", "C"]);

        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.renderer().active, Some(0));
        assert_eq!(
            controller.renderer().entries,
            vec![(0, "A".to_string()), (1, "B".to_string()), (2, "C".to_string())]
        );
        assert_eq!(*controller.player().loaded.borrow(), vec!["/media/A"]);
    }

    #[test]
    fn load_empty_clears_and_leaves_no_cursor() {
        let mut controller = controller(&["A", "B"]);
        controller.load(vec![]).unwrap();

        assert_eq!(controller.current_index(), None);
        assert!(controller.renderer().entries.is_empty());
        assert_eq!(controller.renderer().active, None);
        assert!(!controller.play_next().unwrap());
        assert!(!controller.play_previous().unwrap());
        assert_eq!(controller.player().loaded.borrow().len(), 1);
    }

    #[test]
    fn reload_resets_cursor() {
        let mut controller = controller(&["A", "B", "C"]);
        controller.select(2).unwrap();

        controller.load(vec![item("X"), item("Y")]).unwrap();

        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.current_item().unwrap().display_name, "X");
        assert_eq!(controller.renderer().clears, 2);
    }

    #[test]
    fn next_stops_at_last_item() {
        let mut controller = controller(&["A", "B", "C"]);

        assert!(controller.play_next().unwrap());
        assert!(controller.play_next().unwrap());
        assert!(!controller.play_next().unwrap());

        assert_eq!(controller.current_index(), Some(2));
        assert_eq!(
            *controller.player().loaded.borrow(),
            vec!["/media/A", "/media/B", "/media/C"]
        );
    }

    #[test]
    fn previous_at_first_item_is_a_no_op() {
        let mut controller = controller(&["A", "B"]);

        assert!(!controller.play_previous().unwrap());

        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.player().loaded.borrow().len(), 1);
    }

    #[test]
    fn previous_retreats() {
        let mut controller = controller(&["A", "B", "C"]);
        controller.select(2).unwrap();

        assert!(controller.play_previous().unwrap());

        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.renderer().active, Some(1));
    }

    #[test]
    fn select_sets_cursor_regardless_of_prior_state() {
        let mut controller = controller(&["A", "B", "C", "D"]);
        controller.play_next().unwrap();

        controller.select(3).unwrap();
        assert_eq!(controller.current_index(), Some(3));

        controller.select(0).unwrap();
        assert_eq!(controller.current_index(), Some(0));
        assert_eq!(controller.renderer().active, Some(0));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut controller = controller(&["A", "B"]);
        controller.select(1).unwrap();

        controller.select(5).unwrap();

        assert_eq!(controller.current_index(), Some(1));
        assert_eq!(controller.player().loaded.borrow().len(), 2);
    }

    #[test]
    fn set_active_absent_is_a_no_op() {
        let mut controller = controller(&["A"]);

        controller.set_active(None).unwrap();
        controller.set_active(Some(9)).unwrap();

        assert_eq!(controller.player().loaded.borrow().len(), 1);
    }

    #[test]
    fn scrolls_only_outside_threshold() {
        let names: Vec<String> = (0..30).map(|i| format!("clip{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut controller = controller(&refs);

        controller.select(9).unwrap();
        assert!(controller.renderer().scrolled_to.is_empty());

        controller.select(10).unwrap();
        assert_eq!(controller.renderer().scrolled_to, vec![10]);

        controller.select(15).unwrap();
        assert_eq!(controller.renderer().scrolled_to, vec![10]);

        controller.select(3).unwrap();
        assert_eq!(controller.renderer().scrolled_to, vec![10, 3]);
    }

    #[test]
    fn bindings_are_registered_once() {
        let mut keymap = Keymap::new('n', 'p');
        let mut guard = SetupGuard::new();
        let mut controller = controller(&["A", "B", "C"]);

        assert!(controller.initialize(&mut keymap, &mut guard));
        controller.load(vec![item("A"), item("B"), item("C")]).unwrap();
        assert!(!controller.initialize(&mut keymap, &mut guard));

        for action in keymap.actions_for_key(KeyCode::Char('n')) {
            controller.perform(action).unwrap();
        }

        assert_eq!(controller.current_index(), Some(1));
    }

    #[test]
    fn player_signals_drive_the_cursor() {
        let mut keymap = Keymap::new('n', 'p');
        let mut guard = SetupGuard::new();
        let mut controller = controller(&["A", "B"]);
        controller.initialize(&mut keymap, &mut guard);

        for action in keymap.actions_for_signal(PlayerSignal::Ended) {
            controller.perform(action).unwrap();
        }
        assert_eq!(controller.current_index(), Some(1));

        for action in keymap.actions_for_key(KeyCode::Char(' ')) {
            controller.perform(action).unwrap();
        }
        assert_eq!(*controller.player().toggles.borrow(), 1);
    }

    #[test]
    fn small_viewport_caps_the_threshold() {
        let names: Vec<String> = (0..20).map(|i| format!("clip{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let renderer = FakeRenderer {
            visible: 5,
            ..FakeRenderer::default()
        };
        let mut controller = PlaylistController::new(renderer, FakePlayer::default(), 10);
        controller.load(refs.iter().map(|n| item(n)).collect()).unwrap();

        for _ in 0..4 {
            controller.play_next().unwrap();
        }
        assert!(controller.renderer().scrolled_to.is_empty());

        controller.play_next().unwrap();
        assert_eq!(controller.renderer().scrolled_to, vec![5]);
    }

    #[test]
    fn activations_count_every_handoff() {
        let mut controller = controller(&["A", "B"]);
        assert_eq!(controller.activations(), 1);

        controller.play_next().unwrap();
        controller.play_next().unwrap();
        assert_eq!(controller.activations(), 2);

        controller.load(vec![item("X")]).unwrap();
        assert_eq!(controller.activations(), 3);
    }
}

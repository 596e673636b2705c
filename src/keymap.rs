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

//! Global playlist bindings.
//!
//! Keys and player signals are bound to [`PlaylistAction`]s at runtime. Every
//! registered binding for a key fires, so registration must happen once, see
//! [`crate::playlist::SetupGuard`].

use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlaylistAction {
    TogglePause,
    Next,
    Previous,
    HighlightActive,
}

/// Notifications from the player that the playlist reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerSignal {
    /// The current file played to the end.
    Ended,
    /// The player finished loading a new file.
    MetadataLoaded,
}

pub(crate) struct Keymap {
    next_key: char,
    previous_key: char,
    keys: Vec<(KeyCode, PlaylistAction)>,
    signals: Vec<(PlayerSignal, PlaylistAction)>,
}

impl Keymap {
    pub(crate) fn new(next_key: char, previous_key: char) -> Self {
        Self {
            next_key,
            previous_key,
            keys: vec![],
            signals: vec![],
        }
    }

    pub(crate) fn bind_key(&mut self, key: KeyCode, action: PlaylistAction) {
        self.keys.push((key, action));
    }

    pub(crate) fn bind_signal(&mut self, signal: PlayerSignal, action: PlaylistAction) {
        self.signals.push((signal, action));
    }

    /// Space toggles playback, the configured next/previous keys move the
    /// cursor, the end of a file advances and a freshly loaded file
    /// re-highlights the active entry.
    pub(crate) fn register_playlist_bindings(&mut self) {
        self.bind_key(KeyCode::Char(' '), PlaylistAction::TogglePause);
        self.bind_key(KeyCode::Char(self.next_key), PlaylistAction::Next);
        self.bind_key(KeyCode::Char(self.previous_key), PlaylistAction::Previous);

        self.bind_signal(PlayerSignal::Ended, PlaylistAction::Next);
        self.bind_signal(PlayerSignal::MetadataLoaded, PlaylistAction::HighlightActive);
    }

    pub(crate) fn actions_for_key(&self, key: KeyCode) -> Vec<PlaylistAction> {
        self.keys
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, action)| *action)
            .collect()
    }

    pub(crate) fn actions_for_signal(&self, signal: PlayerSignal) -> Vec<PlaylistAction> {
        self.signals
            .iter()
            .filter(|(s, _)| *s == signal)
            .map(|(_, action)| *action)
            .collect()
    }

    /// Human readable hint for the footer.
    pub(crate) fn hint(&self) -> String {
        format!(
            "space play/pause | {} next | {} previous",
            self.next_key, self.previous_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_registered() {
        let keymap = Keymap::new('n', 'p');

        assert!(keymap.actions_for_key(KeyCode::Char(' ')).is_empty());
        assert!(keymap.actions_for_key(KeyCode::Char('n')).is_empty());
    }

    #[test]
    fn registers_configured_keys() {
        let mut keymap = Keymap::new('l', 'h');
        keymap.register_playlist_bindings();

        assert_eq!(keymap.actions_for_key(KeyCode::Char('l')), vec![PlaylistAction::Next]);
        assert_eq!(keymap.actions_for_key(KeyCode::Char('h')), vec![PlaylistAction::Previous]);
        assert_eq!(
            keymap.actions_for_key(KeyCode::Char(' ')),
            vec![PlaylistAction::TogglePause]
        );
        assert!(keymap.actions_for_key(KeyCode::Char('n')).is_empty());
        assert_eq!(
            keymap.actions_for_signal(PlayerSignal::MetadataLoaded),
            vec![PlaylistAction::HighlightActive]
        );
    }

    #[test]
    fn duplicate_registration_fires_twice() {
        let mut keymap = Keymap::new('n', 'p');
        keymap.register_playlist_bindings();
        keymap.register_playlist_bindings();

        assert_eq!(keymap.actions_for_key(KeyCode::Char('n')).len(), 2);
    }
}

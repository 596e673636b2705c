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

//! Video playback control and state management.
//!
//! This module provides the high-level [`VideoPlayer`] interface used by the
//! UI to control playback. It manages a background worker thread that
//! interfaces with the underlying player library (MPV), which opens its own
//! video window, ensuring that heavy media operations do not block the main
//! application thread.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{
    events::AppEvent, model::MediaSource, player::commands::VideoPlayerCommand,
    playlist::PlayerWidget,
};

/// Represents the current playback status of the player engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Start-up options mirroring the embedded player's configuration.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlayerOptions {
    /// Start playing as soon as a file is loaded.
    pub(crate) autoplay: bool,
    /// Repeat the current file forever; the end-of-file signal never fires.
    pub(crate) loop_playback: bool,
}

/// A handle to the playback engine.
///
/// This struct acts as a command proxy; it does not perform any media
/// processing itself but instead sends instructions to a background worker
/// thread.
pub(crate) struct VideoPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<VideoPlayerCommand>,
}

impl VideoPlayer {
    /// Spawns the player worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `options` - Playback options applied when the engine is created.
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(options: PlayerOptions, event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<VideoPlayerCommand>();

        commands::spawn_player_worker(options, command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal player backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }
}

impl PlayerWidget for VideoPlayer {
    /// Instructs the worker to load the first source, keeping the remaining
    /// variants as fallbacks should it fail to open.
    fn load_sources(&self, sources: &[MediaSource]) -> Result<()> {
        let urls = sources.iter().map(|s| s.url.clone()).collect();
        self.command_tx
            .send(VideoPlayerCommand::LoadSources(urls))?;
        Ok(())
    }

    fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::TogglePause)?;
        Ok(())
    }

    fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Seek(delta))?;
        Ok(())
    }

    /// Stops playback and drops any pending fallback sources.
    fn stop(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Stop)?;
        Ok(())
    }

    fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(VideoPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::ToggleMute)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_wins_over_pause() {
        assert_eq!(VideoPlayer::player_state(true, true), PlayerState::Stopped);
        assert_eq!(VideoPlayer::player_state(true, false), PlayerState::Paused);
        assert_eq!(VideoPlayer::player_state(false, false), PlayerState::Playing);
    }
}

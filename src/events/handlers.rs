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

use anyhow::Result;
use tracing::{debug, error, info};

use crate::{
    App, keymap::PlayerSignal, model::MediaDescriptor, player::PlayerState,
    playlist::PlayerWidget, tasks::AppTask,
};

pub(super) fn handle_videos_loaded<P: PlayerWidget>(
    app: &mut App<P>,
    items: Vec<MediaDescriptor>,
) -> Result<()> {
    app.playlist.load(items)?;
    if app
        .playlist
        .initialize(&mut app.keymap, &mut app.setup_guard)
    {
        debug!(hint = %app.keymap.hint(), "Playlist bindings registered");
    }

    Ok(())
}

// Equivalent of returning to the index page: the filter is dropped and the
// full catalogue reloaded.
pub(super) fn handle_video_deleted<P: PlayerWidget>(app: &mut App<P>, id: i64) -> Result<()> {
    info!(id, "Video deleted, reloading catalogue");
    app.search_bar.reset();
    app.task_tx.send(AppTask::FetchVideos(None))?;

    Ok(())
}

pub(super) fn handle_player_state_changed<P: PlayerWidget>(app: &mut App<P>, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_title_changed<P: PlayerWidget>(app: &mut App<P>, title: String) {
    app.player_title = Some(title);
}

pub(super) fn handle_duration_changed<P: PlayerWidget>(app: &mut App<P>, duration: u64) {
    app.player_duration = Some(duration);
}

pub(super) fn handle_time_changed<P: PlayerWidget>(app: &mut App<P>, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

pub(super) fn handle_volume_changed<P: PlayerWidget>(app: &mut App<P>, volume: u32) {
    app.volume = Some(volume);
}

pub(super) fn handle_metadata_loaded<P: PlayerWidget>(app: &mut App<P>) -> Result<()> {
    dispatch_signal(app, PlayerSignal::MetadataLoaded)
}

pub(super) fn handle_playback_finished<P: PlayerWidget>(app: &mut App<P>) -> Result<()> {
    app.player_time = app.player_duration;
    dispatch_signal(app, PlayerSignal::Ended)
}

// Failures of background work are only logged, the UI stays as it was.
pub(super) fn handle_error(message: String) {
    error!(%message, "Background task failed");
}

fn dispatch_signal<P: PlayerWidget>(app: &mut App<P>, signal: PlayerSignal) -> Result<()> {
    for action in app.keymap.actions_for_signal(signal) {
        app.playlist.perform(action)?;
    }

    Ok(())
}

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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse), background worker
//! updates (HTTP tasks, video player), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    `mpsc` channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    submits tasks to the background worker and drives the playlist.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::{process_key_event, process_mouse_event};

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::error;

use crate::{
    App, model::MediaDescriptor, player::PlayerState, playlist::PlayerWidget, render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    VideosLoaded(Vec<MediaDescriptor>),
    VideoDeleted(i64),

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    MetadataLoaded,
    PlaybackFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn, a worker channel is
/// closed, or a worker reports a fatal error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        if let AppEvent::FatalError(message) = event {
            error!(%message, "Fatal error");
            return Err(anyhow!(message));
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Whatever the event, if it made the playlist hand a new item to the player
/// the status reported for the previous item is dropped.
fn handle_event<P: PlayerWidget>(app: &mut App<P>, event: AppEvent) -> Result<()> {
    let activations = app.playlist.activations();

    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
        AppEvent::VideosLoaded(items) => handle_videos_loaded(app, items)?,
        AppEvent::VideoDeleted(id) => handle_video_deleted(app, id)?,
        AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
        AppEvent::TitleChanged(title) => handle_title_changed(app, title),
        AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
        AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
        AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
        AppEvent::MetadataLoaded => handle_metadata_loaded(app)?,
        AppEvent::PlaybackFinished => handle_playback_finished(app)?,
        AppEvent::Error(message) => handle_error(message),
        AppEvent::Tick | AppEvent::ExitApplication | AppEvent::FatalError(_) => {}
    }

    if app.playlist.activations() != activations {
        app.reset_media_status();
    }

    Ok(())
}

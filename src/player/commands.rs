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

//! MPV-backed playback engine and event processing.
//!
//! This module provides the core playback logic, leveraging `libmpv` for
//! decoding and presenting video in its own window. It manages a background
//! worker thread that bridges the gap between the application's command-based
//! interface and the low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`VideoPlayerCommand`]s from the UI to
//!    control playback (load, pause, seek, etc.).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the UI of state
//!    changes, such as progress, volume updates, and end of file.

use std::{
    collections::VecDeque,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use mpv::Format;
use tracing::{debug, info, warn};

use crate::{
    events::AppEvent,
    player::{PlayerOptions, PlayerState, VideoPlayer},
};

#[derive(Debug)]
pub(crate) enum VideoPlayerCommand {
    LoadSources(Vec<String>),
    TogglePause,
    Seek(i32),
    Stop,
    AdjustVolume(i32),
    ToggleMute,
}

/// Mutable state owned by the worker loop.
struct WorkerState {
    options: PlayerOptions,
    is_paused: bool,
    is_idle: bool,
    player_state: PlayerState,
    /// Source variants still to try for the current item.
    fallbacks: VecDeque<String>,
}

/// Spawns the player worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(
    options: PlayerOptions,
    command_rx: Receiver<VideoPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = video_player_worker(options, command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the player backend.
///
/// This function initializes a local `libmpv` context and alternates between
/// draining incoming commands and polling for outgoing events.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the internal
/// command/event loops encounter an unrecoverable failure.
fn video_player_worker(
    options: PlayerOptions,
    command_rx: Receiver<VideoPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("force-window", "yes")
            .context("Failed to set window option")?;
        if options.loop_playback {
            builder
                .set_option("loop-file", "inf")
                .context("Failed to set loop option")?;
        }
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<&str>("media-title", 0)
        .context("Failed to observe media-title")?;
    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    info!(?options, "Player engine started");

    let mut state = WorkerState {
        options,
        is_paused: false,
        is_idle: true,
        player_state: PlayerState::Stopped,
        fallbacks: VecDeque::new(),
    };

    loop {
        process_commands(&mut handler, &command_rx, &mut state)?;
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }
}

fn load_file(handler: &mut mpv::MpvHandler, url: &str, autoplay: bool) -> Result<()> {
    debug!(url, "Loading file");
    handler
        .command(&["loadfile", url, "replace"])
        .context(format!("Failed to load file: {}", url))?;
    handler.set_property("pause", !autoplay)?;
    Ok(())
}

/// Drains and executes all pending commands from the application channel.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<VideoPlayerCommand>,
    state: &mut WorkerState,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        match command {
            VideoPlayerCommand::LoadSources(urls) => {
                state.fallbacks = urls.into();
                if let Some(url) = state.fallbacks.pop_front() {
                    load_file(handler, &url, state.options.autoplay)?;
                }
            }
            VideoPlayerCommand::TogglePause => {
                handler.command(&["cycle", "pause"])?;
            }
            VideoPlayerCommand::Seek(delta) => {
                handler.command(&["seek", &delta.to_string(), "relative"])?;
            }
            VideoPlayerCommand::Stop => {
                state.fallbacks.clear();
                handler.command(&["stop"])?;
            }
            VideoPlayerCommand::AdjustVolume(delta) => {
                handler.command(&["add", "volume", &delta.to_string()])?;
            }
            VideoPlayerCommand::ToggleMute => {
                handler.command(&["cycle", "mute"])?;
            }
        }
    }

    Ok(())
}

/// Polls for MPV events and synchronizes the application state.
///
/// This function waits for up to 50ms for an event from the MPV context.
/// If an event occurs, it updates internal flags and broadcasts any necessary
/// [`AppEvent`]s to the UI.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    // Deferred until the handler is no longer borrowed by the event.
    let mut retry_with: Option<String> = None;

    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("media-title", Format::Str(title)) => {
                    Some(AppEvent::TitleChanged(title.to_string()))
                }
                ("duration", Format::Double(duration)) => {
                    Some(AppEvent::DurationChanged(duration as u64))
                }
                ("pause", Format::Flag(pause)) => {
                    state.is_paused = pause;
                    None
                }
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(AppEvent::TimeChanged(seconds))
                }
                ("volume", Format::Double(volume)) => {
                    Some(AppEvent::VolumeChanged(volume.round() as u32))
                }
                ("idle-active", Format::Flag(idle_active)) => {
                    state.is_idle = idle_active;
                    None
                }
                _ => None,
            },
            mpv::Event::FileLoaded => {
                state.fallbacks.clear();
                Some(AppEvent::MetadataLoaded)
            }
            mpv::Event::EndFile(result) => match result {
                Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => Some(AppEvent::PlaybackFinished),
                Ok(_) => None,
                Err(e) => {
                    warn!(error = ?e, "Failed to play source");
                    retry_with = state.fallbacks.pop_front();
                    None
                }
            },
            _ => None,
        };

        let new_player_state = VideoPlayer::player_state(state.is_paused, state.is_idle);

        if new_player_state != state.player_state {
            state.player_state = new_player_state;
            event_tx
                .send(AppEvent::PlayerStateChanged(new_player_state))
                .context("Failed to send player state event")?;
        }

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    if let Some(url) = retry_with {
        load_file(handler, &url, state.options.autoplay)?;
    }

    Ok(())
}

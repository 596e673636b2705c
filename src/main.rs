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

//! # vidzui
//!
//! A terminal client for a vidz video server: browse and search the server's
//! catalogue, play videos back to back through libmpv and delete them.
//!
//! The application uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and the
//!   playlist.
//! * **Background Workers** perform HTTP requests and drive the video player
//!   via command channels.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal state is restored even when the event loop fails. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod api;
mod components;
mod config;
mod events;
mod keymap;
mod model;
mod player;
mod playlist;
mod render;
mod tasks;
mod theme;
mod util;

use std::{
    fs::OpenOptions,
    io,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

use crate::{
    api::VideoClient,
    components::{PlaylistView, SearchBar},
    config::AppConfig,
    events::{AppEvent, process_events},
    keymap::Keymap,
    player::{PlayerOptions, PlayerState, VideoPlayer},
    playlist::{PlayerWidget, PlaylistController, SetupGuard},
    tasks::AppTask,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

const TICK_RATE: Duration = Duration::from_millis(250);

/// A delete awaiting the user's confirmation.
#[derive(Debug, Clone)]
struct DeletePrompt {
    id: i64,
    name: String,
}

/// Application state.
///
/// Generic over the playback engine so the event handling can run against an
/// in-memory player.
struct App<P: PlayerWidget = VideoPlayer> {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub playlist: PlaylistController<PlaylistView, P>,
    pub keymap: Keymap,
    pub setup_guard: SetupGuard,

    pub search_bar: SearchBar,
    pub delete_prompt: Option<DeletePrompt>,

    pub player_state: PlayerState,
    pub player_title: Option<String>,
    pub player_duration: Option<u64>,
    pub player_time: Option<u64>,
    pub player_position: Option<f64>,
    pub volume: Option<u32>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let options = PlayerOptions {
            autoplay: config.autoplay,
            loop_playback: config.loop_playback,
        };
        let player = VideoPlayer::new(options, event_tx.clone())?;

        Ok(App::with_player(config, player, event_tx, event_rx, task_tx))
    }
}

impl<P: PlayerWidget> App<P> {
    fn with_player(
        config: AppConfig,
        player: P,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        task_tx: Sender<AppTask>,
    ) -> Self {
        let playlist = PlaylistController::new(PlaylistView::new(), player, config.scroll_threshold);
        let keymap = Keymap::new(config.next_key, config.previous_key);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            playlist,
            keymap,
            setup_guard: SetupGuard::new(),
            search_bar: SearchBar::new(),
            delete_prompt: None,
            player_state: PlayerState::Stopped,
            player_title: None,
            player_duration: None,
            player_time: None,
            player_position: None,
            volume: None,
        }
    }

    /// Forgets what the player reported about the previous media, until it
    /// reports on the new one.
    fn reset_media_status(&mut self) {
        self.player_title = None;
        self.player_duration = None;
        self.player_time = None;
        self.player_position = None;
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_tracing(&config);
    info!(server = %config.server_url, "Starting vidzui");

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Installs the global tracing subscriber.
///
/// The terminal belongs to the UI, so output goes to the configured log file,
/// or nowhere if there is none. `RUST_LOG` overrides the default `info`
/// level.
fn init_tracing(config: &AppConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(log_writer(config))
        .with_ansi(false)
        .try_init();
}

fn log_writer(config: &AppConfig) -> BoxMakeWriter {
    if let Some(path) = &config.log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => return BoxMakeWriter::new(Mutex::new(file)),
            Err(err) => eprintln!("Unable to open log file {path}: {err}"),
        }
    }

    BoxMakeWriter::new(io::sink)
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to perform HTTP requests against the server.
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// The video player worker is already running, it is owned by the playlist.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Tui, app: &mut App, task_rx: Receiver<AppTask>) -> Result<()> {
    let client = VideoClient::new(&app.config.server_url, app.config.http_timeout());
    info!(base_url = client.base_url(), "Using video server");
    tasks::spawn_task_worker(client, task_rx, app.event_tx.clone());

    // Translate raw terminal input to application events. Only key presses
    // are forwarded, some platforms also report releases and repeats.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx_input.send(AppEvent::Key(key))
                }
                Ok(Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                Ok(_) => Ok(()),
                Err(err) => {
                    warn!(%err, "Failed to read terminal input");
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // The tick is effectively the minimum frame rate, it keeps the progress
    // display moving.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    app.task_tx
        .send(AppTask::FetchVideos(None))
        .context("Task worker is not running")?;

    process_events(terminal, app)
}

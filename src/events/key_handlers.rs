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
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use tracing::{info, warn};

use crate::{
    App, DeletePrompt,
    components::{PlaylistViewAction, SearchBarAction},
    events::AppEvent,
    playlist::PlayerWidget,
    tasks::AppTask,
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 30;

/// Maps keyboard input to application actions and playback commands.
///
/// Input is offered, in order, to:
///
/// * **Delete confirmation**: while a prompt is open every key answers it.
/// * **Search bar**: consumes keys while focused.
/// * **Playlist bindings**: space, next and previous, as registered in the
///   keymap.
/// * **Playlist pane**: cursor movement and activation.
/// * **Global keys**: quit, reload, delete, seek and volume.
///
/// # Errors
///
/// Returns an error if a command fails to send to a background worker.
pub(super) fn process_key_event<P: PlayerWidget>(app: &mut App<P>, key: KeyEvent) -> Result<()> {
    if let Some(prompt) = app.delete_prompt.take() {
        return answer_delete_prompt(app, prompt, key);
    }

    let event = Event::Key(key);

    let (consumed, action) = app.search_bar.handle_event(&event);
    match action {
        Some(SearchBarAction::Submit(query)) => {
            info!(%query, "Searching");
            app.task_tx.send(AppTask::FetchVideos(Some(query)))?;
        }
        Some(SearchBarAction::Cancel) | None => {}
    }
    if consumed {
        return Ok(());
    }

    // Bindings are plain keys, chords such as Ctrl-C fall through.
    if matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
        let actions = app.keymap.actions_for_key(key.code);
        if !actions.is_empty() {
            for action in actions {
                app.playlist.perform(action)?;
            }
            return Ok(());
        }
    }

    if let Some(PlaylistViewAction::Activate(index)) =
        app.playlist.renderer_mut().process_event(&event)
    {
        app.playlist.select(index)?;
        return Ok(());
    }

    process_global_key_event(app, key)
}

pub(super) fn process_mouse_event<P: PlayerWidget>(
    app: &mut App<P>,
    mouse: MouseEvent,
) -> Result<()> {
    if app.search_bar.active() || app.delete_prompt.is_some() {
        return Ok(());
    }

    if let Some(PlaylistViewAction::Activate(index)) =
        app.playlist.renderer_mut().process_event(&Event::Mouse(mouse))
    {
        app.playlist.select(index)?;
    }

    Ok(())
}

fn answer_delete_prompt<P: PlayerWidget>(
    app: &mut App<P>,
    prompt: DeletePrompt,
    key: KeyEvent,
) -> Result<()> {
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        info!(id = prompt.id, name = %prompt.name, "Deleting video");
        app.task_tx.send(AppTask::DeleteVideo(prompt.id))?;
    }

    Ok(())
}

fn process_global_key_event<P: PlayerWidget>(app: &mut App<P>, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('r'), _) => {
            let query = app.search_bar.submitted().to_string();
            app.task_tx.send(AppTask::FetchVideos(Some(query)))?;
        }

        (KeyCode::Char('d'), _) => {
            if let Some(item) = app.playlist.current_item() {
                match item.id {
                    Some(id) => {
                        app.delete_prompt = Some(DeletePrompt {
                            id,
                            name: item.display_name.clone(),
                        });
                    }
                    None => warn!(name = %item.display_name, "Video has no id, cannot delete"),
                }
            }
        }

        (KeyCode::Char(','), _) => app.playlist.player().seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.playlist.player().seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) | (KeyCode::Left, _) => app.playlist.player().seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) | (KeyCode::Right, _) => app.playlist.player().seek(SEEK_DELTA)?,
        (KeyCode::Char('s'), _) => app.playlist.player().stop()?,
        (KeyCode::Char('-'), _) => app.playlist.player().adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.playlist.player().adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.playlist.player().adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.playlist.player().adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.playlist.player().toggle_mute()?,

        _ => {}
    }

    Ok(())
}

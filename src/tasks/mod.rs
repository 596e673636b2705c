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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into calls against the vidz server and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Requests are fire-and-forget: they run one at a time in submission order,
//! are never retried and cannot be cancelled.

mod handlers;

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::debug;

use crate::{api::VideoClient, events::AppEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppTask {
    /// Fetch the catalogue, filtered by title unless the query is blank.
    FetchVideos(Option<String>),

    DeleteVideo(i64),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `client` - The HTTP client bound to the vidz server.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    client: VideoClient,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                client: &client,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(format!("{:#}", e)));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    client: &'a VideoClient,
    event_tx: &'a Sender<AppEvent>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    debug!(?task, "Handling task");

    match task {
        AppTask::FetchVideos(query) => handlers::fetch_videos(ctx, query),
        AppTask::DeleteVideo(id) => handlers::delete_video(ctx, id),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use mockito::Matcher;

    use super::*;

    fn run(server: &mockito::Server, task: AppTask) -> (Result<()>, Vec<AppEvent>) {
        let client = VideoClient::new(&server.url(), Duration::from_secs(5));
        let (event_tx, event_rx) = mpsc::channel();

        let result = handle_task(
            task,
            &TaskContext {
                client: &client,
                event_tx: &event_tx,
            },
        );

        drop(event_tx);
        (result, event_rx.iter().collect())
    }

    #[test]
    fn fetch_sends_loaded_videos() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/videos")
            .match_query(Matcher::UrlEncoded("title".into(), "cat".into()))
            .with_status(200)
            .with_body(r#"[{"id": 4, "title": "cat.mp4", "path": "/cat.mp4", "type": "video/mp4"}]"#)
            .create();

        let (result, events) = run(&server, AppTask::FetchVideos(Some("cat".to_string())));

        assert!(result.is_ok());
        match events.as_slice() {
            [AppEvent::VideosLoaded(items)] => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, Some(4));
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }

    #[test]
    fn failed_fetch_sends_nothing() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/videos")
            .with_status(500)
            .create();

        let (result, events) = run(&server, AppTask::FetchVideos(None));

        assert!(result.is_err());
        assert!(events.is_empty());
    }

    #[test]
    fn successful_delete_is_reported() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/")
            .match_query(Matcher::UrlEncoded("id".into(), "9".into()))
            .with_status(200)
            .with_body("{}")
            .create();

        let (result, events) = run(&server, AppTask::DeleteVideo(9));

        assert!(result.is_ok());
        assert!(matches!(events.as_slice(), [AppEvent::VideoDeleted(9)]));
    }

    #[test]
    fn delete_not_found_does_not_navigate() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/")
            .match_query(Matcher::Any)
            .with_status(404)
            .create();

        let (result, events) = run(&server, AppTask::DeleteVideo(9));

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("404"));
        assert!(events.is_empty());
    }
}

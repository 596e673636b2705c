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

use anyhow::{Context, Result};
use tracing::info;

use crate::{events::AppEvent, tasks::TaskContext};

pub(super) fn fetch_videos(ctx: &TaskContext, query: Option<String>) -> Result<()> {
    let videos = ctx
        .client
        .list_videos(query.as_deref())
        .context("Failed to fetch videos")?;

    info!(count = videos.len(), query = ?query, "Fetched videos");
    ctx.event_tx.send(AppEvent::VideosLoaded(videos))?;

    Ok(())
}

pub(super) fn delete_video(ctx: &TaskContext, id: i64) -> Result<()> {
    ctx.client
        .delete_video(id)
        .with_context(|| format!("Failed to delete video {}", id))?;

    info!(id, "Deleted video");
    ctx.event_tx.send(AppEvent::VideoDeleted(id))?;

    Ok(())
}

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

//! In-memory renderer and player for exercising the playlist without a
//! terminal or libmpv.

use std::cell::RefCell;

use anyhow::Result;

use crate::{
    model::{MediaDescriptor, MediaSource},
    playlist::{PlayerWidget, PlaylistRenderer},
};

pub(crate) fn item(name: &str) -> MediaDescriptor {
    MediaDescriptor::new(
        name,
        vec![MediaSource {
            url: format!("/media/{name}"),
            mime_type: "video/mp4".to_string(),
        }],
    )
}

#[derive(Default)]
pub(crate) struct FakeRenderer {
    pub(crate) entries: Vec<(usize, String)>,
    pub(crate) active: Option<usize>,
    pub(crate) offset: usize,
    pub(crate) visible: usize,
    pub(crate) scrolled_to: Vec<usize>,
    pub(crate) clears: usize,
}

impl PlaylistRenderer for FakeRenderer {
    fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
        self.clears += 1;
    }

    fn append_entry(&mut self, index: usize, name: &str) {
        self.entries.push((index, name.to_string()));
    }

    fn mark_active(&mut self, index: usize) {
        self.active = Some(index);
    }

    fn scroll_offset(&self) -> usize {
        self.offset
    }

    fn visible_rows(&self) -> usize {
        self.visible
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.offset = index;
        self.scrolled_to.push(index);
    }
}

/// Records what it is asked to do.
#[derive(Default)]
pub(crate) struct FakePlayer {
    pub(crate) loaded: RefCell<Vec<String>>,
    pub(crate) toggles: RefCell<usize>,
    /// Transport commands other than load and pause, e.g. `seek -5`.
    pub(crate) commands: RefCell<Vec<String>>,
}

impl FakePlayer {
    fn record(&self, command: String) -> Result<()> {
        self.commands.borrow_mut().push(command);
        Ok(())
    }
}

impl PlayerWidget for FakePlayer {
    fn load_sources(&self, sources: &[MediaSource]) -> Result<()> {
        self.loaded.borrow_mut().push(sources[0].url.clone());
        Ok(())
    }

    fn toggle_pause(&self) -> Result<()> {
        *self.toggles.borrow_mut() += 1;
        Ok(())
    }

    fn seek(&self, delta: i32) -> Result<()> {
        self.record(format!("seek {delta}"))
    }

    fn stop(&self) -> Result<()> {
        self.record("stop".to_string())
    }

    fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.record(format!("volume {delta}"))
    }

    fn toggle_mute(&self) -> Result<()> {
        self.record("mute".to_string())
    }
}

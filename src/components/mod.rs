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

//! Interactive UI components.
//!
//! * [`PlaylistView`]: the list of videos, the terminal implementation of
//!   [`crate::playlist::PlaylistRenderer`].
//! * [`SearchBar`]: the title search input.

mod playlist;
mod search;

pub(crate) use playlist::{PlaylistView, PlaylistViewAction};
pub(crate) use search::{SearchBar, SearchBarAction};

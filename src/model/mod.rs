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

//! Domain models and core data structures.
//!
//! This module defines the entries of a playlist, [`MediaDescriptor`], and the
//! wire representation of a video as served by the vidz HTTP API,
//! [`VideoRecord`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

/// Path prefix under which the server streams media files.
pub(crate) const MEDIA_PREFIX: &str = "/media";

// Everything but the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// One playable variant of a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaSource {
    pub(crate) url: String,
    pub(crate) mime_type: String,
}

/// One playable entry with its display name and one or more source variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaDescriptor {
    pub(crate) id: Option<i64>,
    pub(crate) display_name: String,
    pub(crate) sources: Vec<MediaSource>,
}

impl MediaDescriptor {
    pub(crate) fn new(display_name: impl Into<String>, sources: Vec<MediaSource>) -> Self {
        Self {
            id: None,
            display_name: display_name.into(),
            sources,
        }
    }
}

/// A video as returned by `GET /api/videos`.
///
/// The server also emits bookkeeping fields (size, timestamps and the like)
/// which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoRecord {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    pub(crate) title: String,
    pub(crate) path: String,
    #[serde(rename = "type", default)]
    pub(crate) mime_type: String,
}

impl VideoRecord {
    /// Converts the record into a playlist entry whose single source is
    /// streamed from `base_url`.
    pub(crate) fn into_descriptor(self, base_url: &str) -> MediaDescriptor {
        let url = media_url(base_url, &self.path);

        let mut item = MediaDescriptor::new(
            self.title,
            vec![MediaSource {
                url,
                mime_type: self.mime_type,
            }],
        );
        // Zero is the server's "no record" value.
        item.id = self.id.filter(|id| *id > 0);
        item
    }
}

/// Builds `<base>/media/<path>` with every path segment percent-encoded, so
/// `#`, `?` and `%` in file names stay part of the path.
fn media_url(base_url: &str, path: &str) -> String {
    let mut url = format!("{}{}", base_url.trim_end_matches('/'), MEDIA_PREFIX);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        url.push('/');
        url.push_str(&utf8_percent_encode(segment, PATH_SEGMENT).to_string());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_converts_to_media_url() {
        let record: VideoRecord = serde_json::from_str(
            r#"{"id": 7, "title": "clip.mp4", "path": "/home/me/clip.mp4", "type": "video/mp4"}"#,
        )
        .unwrap();

        let item = record.into_descriptor("http://localhost:8080/");

        assert_eq!(item.id, Some(7));
        assert_eq!(item.display_name, "clip.mp4");
        assert_eq!(
            item.sources,
            vec![MediaSource {
                url: "http://localhost:8080/media/home/me/clip.mp4".to_string(),
                mime_type: "video/mp4".to_string(),
            }]
        );
    }

    #[test]
    fn record_ignores_unknown_fields_and_defaults_missing_ones() {
        let record: VideoRecord = serde_json::from_str(
            r#"{"ID": 3, "CreatedAt": "2023-01-01T00:00:00Z", "title": "a", "path": "/a.webm"}"#,
        )
        .unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.mime_type, "");
    }

    #[test]
    fn zero_id_is_treated_as_absent() {
        let record: VideoRecord =
            serde_json::from_str(r#"{"id": 0, "title": "a", "path": "/a.webm"}"#).unwrap();

        assert_eq!(record.into_descriptor("").id, None);
    }

    #[test]
    fn media_url_encodes_reserved_characters() {
        let record: VideoRecord = serde_json::from_str(
            r#"{"id": 2, "title": "x", "path": "/clips/50% off #1?.mp4"}"#,
        )
        .unwrap();

        let item = record.into_descriptor("http://localhost:8080");

        assert_eq!(
            item.sources[0].url,
            "http://localhost:8080/media/clips/50%25%20off%20%231%3F.mp4"
        );
    }
}

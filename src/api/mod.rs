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

//! HTTP client for the vidz server.
//!
//! Two endpoints are used:
//!
//! * `GET /api/videos[?title=<query>]` lists the catalogue, optionally
//!   filtered by a case-insensitive title match on the server.
//! * `POST /?id=<id>` deletes a video; the server answers `200` with an empty
//!   JSON object.
//!
//! All calls are blocking and are expected to run on the task worker thread.

use std::time::Duration;

use thiserror::Error;
use ureq::Agent;

use crate::model::{MediaDescriptor, VideoRecord};

const VIDEOS_PATH: &str = "/api/videos";
const TITLE_PARAM: &str = "title";

#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("HTTP request to {0} failed: {1}")]
    Transport(String, ureq::Error),
    #[error("{0} returned HTTP status {1}")]
    Status(String, u16),
    #[error("Failed to decode response from {0}: {1}")]
    Decode(String, ureq::Error),
}

/// Blocking client bound to one vidz server.
#[derive(Clone)]
pub(crate) struct VideoClient {
    base_url: String,
    agent: Agent,
}

impl VideoClient {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the catalogue, filtered by `title` unless the query is blank.
    ///
    /// A blank query returns the full, unfiltered list, the server treats a
    /// missing `title` parameter that way.
    pub(crate) fn list_videos(&self, title: Option<&str>) -> Result<Vec<MediaDescriptor>, ApiError> {
        let url = format!("{}{}", self.base_url, VIDEOS_PATH);

        let mut request = self.agent.get(&url);
        if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
            request = request.query(TITLE_PARAM, title);
        }

        let mut response = request
            .call()
            .map_err(|e| ApiError::Transport(url.clone(), e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ApiError::Status(url, status));
        }

        let records: Vec<VideoRecord> = response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::Decode(url.clone(), e))?;

        Ok(records
            .into_iter()
            .map(|record| record.into_descriptor(&self.base_url))
            .collect())
    }

    /// Deletes the video with the given id.
    ///
    /// Anything other than a `200` carrying a JSON body is a failure.
    pub(crate) fn delete_video(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/?id={}", self.base_url, id);

        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send_empty()
            .map_err(|e| ApiError::Transport(url.clone(), e))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ApiError::Status(url, status));
        }

        response
            .body_mut()
            .read_json::<serde_json::Value>()
            .map_err(|e| ApiError::Decode(url.clone(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    const BODY: &str = r#"[
        {"id": 1, "title": "Alpha.mp4", "path": "/v/Alpha.mp4", "type": "video/mp4"},
        {"id": 2, "title": "Beta.webm", "path": "/v/Beta.webm", "type": "video/webm"}
    ]"#;

    fn client(server: &mockito::Server) -> VideoClient {
        VideoClient::new(&server.url(), Duration::from_secs(5))
    }

    #[test]
    fn empty_search_requests_the_unfiltered_list() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/videos")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create();

        let videos = client(&server).list_videos(Some("   ")).unwrap();

        mock.assert();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].display_name, "Alpha.mp4");
        assert_eq!(
            videos[1].sources[0].url,
            format!("{}/media/v/Beta.webm", server.url())
        );
    }

    #[test]
    fn search_passes_title_query() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/videos")
            .match_query(Matcher::UrlEncoded("title".into(), "alpha beta".into()))
            .with_status(200)
            .with_body("[]")
            .create();

        let videos = client(&server).list_videos(Some("alpha beta")).unwrap();

        mock.assert();
        assert!(videos.is_empty());
    }

    #[test]
    fn non_json_list_is_a_decode_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/videos")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let err = client(&server).list_videos(None).unwrap_err();

        assert!(matches!(err, ApiError::Decode(..)));
    }

    #[test]
    fn delete_posts_id() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/")
            .match_query(Matcher::UrlEncoded("id".into(), "42".into()))
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body("{}")
            .create();

        client(&server).delete_video(42).unwrap();

        mock.assert();
    }

    #[test]
    fn delete_not_found_is_an_error() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("not found")
            .create();

        let err = client(&server).delete_video(42).unwrap_err();

        assert!(matches!(err, ApiError::Status(_, 404)));
    }
}

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

//! Persisted settings, loaded through `confy` from the platform config
//! directory. Missing keys fall back to their defaults so older files keep
//! working as options are added.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "vidzui";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Base URL of the vidz server, e.g. `http://localhost:8080`.
    pub server_url: String,
    pub http_timeout_secs: u64,

    /// Number of playlist rows below the scroll offset that count as "in
    /// view" when a new item becomes active.
    pub scroll_threshold: usize,

    pub next_key: char,
    pub previous_key: char,

    pub autoplay: bool,
    pub loop_playback: bool,

    /// Tracing output, the terminal itself belongs to the UI.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server_url: "http://localhost:8080".to_string(),
            http_timeout_secs: 10,
            scroll_threshold: 10,
            next_key: 'n',
            previous_key: 'p',
            autoplay: true,
            loop_playback: false,
            log_file: Some("vidzui.log".to_string()),
        }
    }
}

impl AppConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server_url": "http://nas:9000", "next_key": "j"}"#).unwrap();

        assert_eq!(config.server_url, "http://nas:9000");
        assert_eq!(config.next_key, 'j');
        assert_eq!(config.previous_key, 'p');
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert!(config.autoplay);
    }
}

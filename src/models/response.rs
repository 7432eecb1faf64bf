//! The JSON envelope shared by all Kuwo web endpoints.

use serde::Deserialize;
use serde_json::Value;

use super::{PlaylistSummary, Song};

/// Embedded status code the service uses for success.
pub const CODE_OK: i64 = 200;

/// Decoded response envelope.
///
/// Every endpoint answers `{code, message, data}` where `data` differs per
/// endpoint. The payload stays loose ([`Value`]) and is narrowed on demand
/// by [`ApiResponse::songs`] / [`ApiResponse::playlists`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    /// Embedded status code; 200 means success even though the HTTP layer
    /// already returned 200.
    #[serde(default)]
    pub code: i64,

    /// Service-provided diagnostic, usually only set on failure.
    #[serde(default)]
    pub message: Option<String>,

    /// Endpoint-specific payload.
    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    /// Whether the embedded status code reports success.
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }

    /// Extract the song list (`data.musicList`) from a chart or
    /// playlist-detail response.
    ///
    /// Entries that fail typed decoding degrade to [`Song::default`] so the
    /// row count matches the raw list length.
    pub fn songs(&self) -> Vec<Song> {
        self.data
            .get("musicList")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Extract the playlist list (`data.data`) from a recommendation
    /// response. Entries that are not JSON objects are silently skipped.
    pub fn playlists(&self) -> Vec<PlaylistSummary> {
        self.data
            .get("data")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.is_object())
                    .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default()
    }
}

//! Song entry model.

use serde::{Deserialize, Serialize};

/// A single song as listed by the chart and playlist-detail endpoints.
///
/// The service returns far more fields than these; everything beyond what
/// the listings print is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Song {
    /// Song title.
    pub name: String,

    /// Artist name(s), `&`-joined by the service.
    pub artist: String,

    /// Album title, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_song_from_full_entry() {
        let song: Song = serde_json::from_value(json!({
            "name": "Song A",
            "artist": "Artist B",
            "album": "Album C",
            "rid": 12345,
            "pay": "16711935"
        }))
        .unwrap();
        assert_eq!(song.name, "Song A");
        assert_eq!(song.artist, "Artist B");
        assert_eq!(song.album.as_deref(), Some("Album C"));
    }

    #[test]
    fn test_song_missing_fields_default() {
        let song: Song = serde_json::from_value(json!({ "name": "Only Name" })).unwrap();
        assert_eq!(song.name, "Only Name");
        assert_eq!(song.artist, "");
        assert_eq!(song.album, None);
    }
}

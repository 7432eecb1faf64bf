//! Playlist-related models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort order for the recommended-playlist listing.
///
/// The service only understands an explicit `order=hot`; omitting the
/// parameter is assumed to mean "new".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistOrder {
    /// Most recently published first (service default, parameter omitted).
    #[default]
    New,
    /// Most listened first.
    Hot,
}

/// Listen counter as returned by the service.
///
/// Kuwo is stringly typed in places: the same field arrives as a JSON
/// number on some endpoints and as a quoted string on others.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListenCount {
    Number(u64),
    Text(String),
}

impl fmt::Display for ListenCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenCount::Number(n) => write!(f, "{}", n),
            ListenCount::Text(s) => f.write_str(s),
        }
    }
}

/// A playlist as listed by the recommendation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaylistSummary {
    /// Playlist title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Cover image URL; some entries carry only this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    /// Total listen count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listencnt: Option<ListenCount>,
}

impl PlaylistSummary {
    /// Title to display: name, falling back to the image URL, then "Unknown".
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.img.as_deref())
            .unwrap_or("Unknown")
    }

    /// Listen count to display, "N/A" when absent.
    pub fn display_listen_count(&self) -> String {
        match &self.listencnt {
            Some(count) => count.to_string(),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_prefers_name() {
        let summary = PlaylistSummary {
            name: Some("Chill".to_string()),
            img: Some("https://img.example/1.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(summary.display_name(), "Chill");
    }

    #[test]
    fn test_display_name_falls_back_to_img() {
        let summary = PlaylistSummary {
            img: Some("https://img.example/1.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(summary.display_name(), "https://img.example/1.jpg");
    }

    #[test]
    fn test_display_name_unknown() {
        assert_eq!(PlaylistSummary::default().display_name(), "Unknown");
    }

    #[test]
    fn test_listen_count_number_or_string() {
        let from_number: PlaylistSummary =
            serde_json::from_value(json!({ "name": "A", "listencnt": 4321 })).unwrap();
        assert_eq!(from_number.display_listen_count(), "4321");

        let from_string: PlaylistSummary =
            serde_json::from_value(json!({ "name": "B", "listencnt": "98765" })).unwrap();
        assert_eq!(from_string.display_listen_count(), "98765");
    }

    #[test]
    fn test_listen_count_absent() {
        let summary: PlaylistSummary = serde_json::from_value(json!({ "name": "C" })).unwrap();
        assert_eq!(summary.display_listen_count(), "N/A");
    }
}

//! Console formatting for decoded responses.
//!
//! Both formatters are defensive: a failed request or an envelope with a
//! non-200 embedded code produces exactly one failure line and nothing else,
//! so batch runs keep going past individual failures.

use std::io::{self, Write};

use crate::error::Result;
use crate::models::ApiResponse;

pub(crate) const RULE: &str = "============================================================";

/// Write a song listing (chart or playlist detail) with a title header.
pub fn write_songs<W: Write>(out: &mut W, result: &Result<ApiResponse>, title: &str) -> io::Result<()> {
    let response = match usable(result) {
        Ok(response) => response,
        Err(reason) => return writeln!(out, "Request failed: {}", reason),
    };

    let songs = response.songs();
    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "{} ({} songs)", title, songs.len())?;
    writeln!(out, "{}", RULE)?;
    for (i, song) in songs.iter().enumerate() {
        writeln!(out, "{:2}. {} - {}", i + 1, song.name, song.artist)?;
    }
    Ok(())
}

/// Write a playlist listing with a title header.
pub fn write_playlists<W: Write>(
    out: &mut W,
    result: &Result<ApiResponse>,
    title: &str,
) -> io::Result<()> {
    let response = match usable(result) {
        Ok(response) => response,
        Err(reason) => return writeln!(out, "Request failed: {}", reason),
    };

    let playlists = response.playlists();
    writeln!(out, "\n{}", RULE)?;
    writeln!(out, "{} ({} playlists)", title, playlists.len())?;
    writeln!(out, "{}", RULE)?;
    for (i, playlist) in playlists.iter().enumerate() {
        writeln!(
            out,
            "{:2}. {} - plays: {}",
            i + 1,
            playlist.display_name(),
            playlist.display_listen_count()
        )?;
    }
    Ok(())
}

/// Accept the response when it is usable, otherwise produce the one-line
/// failure reason: the typed error, the service-provided message, or a
/// generic fallback.
fn usable(result: &Result<ApiResponse>) -> std::result::Result<&ApiResponse, String> {
    match result {
        Err(err) => Err(err.to_string()),
        Ok(response) if !response.is_ok() => Err(response
            .message
            .clone()
            .unwrap_or_else(|| "request error".to_string())),
        Ok(response) => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KuwoError;
    use serde_json::json;

    fn render_songs(result: &Result<ApiResponse>) -> String {
        let mut out = Vec::new();
        write_songs(&mut out, result, "Test chart").unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render_playlists(result: &Result<ApiResponse>) -> String {
        let mut out = Vec::new();
        write_playlists(&mut out, result, "Test playlists").unwrap();
        String::from_utf8(out).unwrap()
    }

    fn lines(output: &str) -> Vec<&str> {
        output.lines().filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn test_songs_failure_is_exactly_one_line() {
        let output = render_songs(&Err(KuwoError::Timeout));
        assert_eq!(lines(&output), vec!["Request failed: Request timed out"]);
    }

    #[test]
    fn test_playlists_failure_is_exactly_one_line() {
        let output = render_playlists(&Err(KuwoError::HttpStatus(403)));
        assert_eq!(
            lines(&output),
            vec!["Request failed: Unexpected HTTP status 403"]
        );
    }

    #[test]
    fn test_embedded_error_code_uses_service_message() {
        let response: ApiResponse =
            serde_json::from_value(json!({ "code": 500, "message": "busy" })).unwrap();
        let output = render_songs(&Ok(response));
        assert_eq!(lines(&output), vec!["Request failed: busy"]);
    }

    #[test]
    fn test_embedded_error_code_without_message_uses_fallback() {
        let response: ApiResponse = serde_json::from_value(json!({ "code": 500 })).unwrap();
        let output = render_songs(&Ok(response));
        assert_eq!(lines(&output), vec!["Request failed: request error"]);
    }

    #[test]
    fn test_song_rows_match_entry_count() {
        let response: ApiResponse = serde_json::from_value(json!({
            "code": 200,
            "data": { "musicList": [
                { "name": "One", "artist": "A" },
                { "name": "Two", "artist": "B" },
                { "name": "Three", "artist": "C" }
            ]}
        }))
        .unwrap();
        let output = render_songs(&Ok(response));
        let all = lines(&output);
        // rule, header, rule, then 3 numbered rows
        assert_eq!(all.len(), 6);
        assert!(all[1].contains("Test chart (3 songs)"));
        assert!(all[3].ends_with("One - A"));
        assert!(all[5].ends_with("Three - C"));
    }

    #[test]
    fn test_playlist_rows_skip_non_object_entries() {
        let response: ApiResponse = serde_json::from_value(json!({
            "code": 200,
            "data": { "data": [
                { "name": "List A", "listencnt": 7 },
                "not-a-record",
                { "name": "List B" }
            ]}
        }))
        .unwrap();
        let output = render_playlists(&Ok(response));
        let all = lines(&output);
        // one fewer row than the raw list length
        assert_eq!(all.len(), 5);
        assert!(all[1].contains("(2 playlists)"));
        assert!(all[3].ends_with("List A - plays: 7"));
        assert!(all[4].ends_with("List B - plays: N/A"));
    }
}

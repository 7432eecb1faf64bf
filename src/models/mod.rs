//! Data models for Kuwo API responses.
//!
//! This module contains the response envelope shared by all endpoints and
//! the typed song/playlist entries extracted from it.

pub mod playlist;
pub mod response;
pub mod song;

// Re-exports for convenience
pub use playlist::{ListenCount, PlaylistOrder, PlaylistSummary};
pub use response::ApiResponse;
pub use song::Song;

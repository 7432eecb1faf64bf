//! # kuwors
//!
//! A Rust client for the Kuwo music service's undocumented web JSON API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kuwors::{chart, Credentials, KuwoApi, PlaylistOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // secret and cookie are copied from a logged-in browser session
//!     let creds = Credentials::new("secret_from_browser", "k1=v1; k2=v2");
//!     creds.validate()?;
//!
//!     let api = KuwoApi::new(&creds)?;
//!
//!     // Top 10 of the popular chart
//!     let popular = api.rank(chart::POPULAR, 1, 10).await?;
//!     for song in popular.songs() {
//!         println!("{} - {}", song.name, song.artist);
//!     }
//!
//!     // Hottest recommended playlists
//!     let hot = api.playlist(1, 10, PlaylistOrder::Hot).await?;
//!     for playlist in hot.playlists() {
//!         println!("{}", playlist.display_name());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! The service gates its endpoints behind a `secret` header and session
//! cookies. Both must be copied manually from the browser's developer tools
//! (there is no login flow); see [`Credentials`].

pub mod api;
pub mod credentials;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;

// Re-exports for convenience
pub use api::{chart, KuwoApi};
pub use credentials::Credentials;
pub use error::{KuwoError, Result};
pub use models::{ApiResponse, PlaylistOrder, PlaylistSummary, Song};

//! Mixtape Core
//!
//! Storage-agnostic domain types, input whitelisting and error handling for Mixtape.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Song` and their create/update payloads
//! - **Input Boundary**: `PlaylistParams` / `SongParams` keep only permitted fields
//!   and turn them into validated payloads
//! - **Storage Trait**: `StorageContext`, the repository the server talks to
//! - **Error Handling**: Unified `MixtapeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::params::PlaylistParams;
//!
//! let params = PlaylistParams {
//!     name: Some("Road Trip".to_string()),
//! };
//! let create = params.into_create().unwrap();
//! assert_eq!(create.name, "Road Trip");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{MixtapeError, Result};
pub use params::{PlaylistParams, SongParams, ValidationErrors};
pub use storage::StorageContext;

pub use types::{
    CreatePlaylist, CreateSong, Playlist, PlaylistId, Song, SongId, UpdatePlaylist,
};

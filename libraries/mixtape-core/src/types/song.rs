//! Song types

use super::ids::{PlaylistId, SongId};
use serde::{Deserialize, Serialize};

/// Song belonging to a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub playlist_id: PlaylistId,
    pub title: String,
    pub artist: Option<String>,

    /// 1-based position within the playlist
    pub position: i64,
    pub created_at: String,
}

/// Data for adding a song to a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSong {
    pub title: String,
    pub artist: Option<String>,
}

//! Storage trait for playlists and their songs

use crate::error::Result;
use crate::types::{CreatePlaylist, CreateSong, Playlist, PlaylistId, Song, UpdatePlaylist};
use async_trait::async_trait;

/// Storage context providing access to database operations
///
/// The server depends only on this trait; the SQLite implementation lives in
/// `mixtape-storage`.
#[async_trait]
pub trait StorageContext: Send + Sync {
    /// Check that the backing store answers queries
    async fn ping(&self) -> Result<()>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get all playlists, ordered by id
    async fn get_all_playlists(&self) -> Result<Vec<Playlist>>;

    /// Get playlist by ID, `None` when absent
    async fn get_playlist_by_id(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Get playlist with its songs populated
    async fn get_playlist_with_songs(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Create a new playlist
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Rename a playlist
    ///
    /// Fails with `PlaylistNotFound` when the playlist does not exist.
    async fn update_playlist(&self, id: PlaylistId, playlist: UpdatePlaylist)
        -> Result<Playlist>;

    /// Delete playlist and its songs
    ///
    /// Fails with `PlaylistNotFound` when the playlist does not exist.
    async fn delete_playlist(&self, id: PlaylistId) -> Result<()>;

    /// Strict lookup: `PlaylistNotFound` instead of `None`
    async fn find_playlist(&self, id: PlaylistId) -> Result<Playlist> {
        self.get_playlist_by_id(id)
            .await?
            .ok_or(crate::MixtapeError::PlaylistNotFound(id))
    }

    // ========================================================================
    // Songs
    // ========================================================================

    /// Get songs of a playlist in position order
    async fn get_playlist_songs(&self, playlist_id: PlaylistId) -> Result<Vec<Song>>;

    /// Append a song to the end of a playlist
    async fn create_song(&self, playlist_id: PlaylistId, song: CreateSong) -> Result<Song>;
}

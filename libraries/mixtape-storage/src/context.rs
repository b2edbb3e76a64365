use crate::{playlists, songs};
use async_trait::async_trait;
use mixtape_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // Playlists
    async fn get_all_playlists(&self) -> Result<Vec<Playlist>> {
        playlists::get_all(&self.pool).await
    }

    async fn get_playlist_by_id(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn get_playlist_with_songs(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        playlists::get_with_songs(&self.pool, id).await
    }

    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        playlists::create(&self.pool, playlist).await
    }

    async fn update_playlist(&self, id: PlaylistId, playlist: UpdatePlaylist) -> Result<Playlist> {
        playlists::update(&self.pool, id, playlist).await
    }

    async fn delete_playlist(&self, id: PlaylistId) -> Result<()> {
        playlists::delete(&self.pool, id).await
    }

    // Songs
    async fn get_playlist_songs(&self, playlist_id: PlaylistId) -> Result<Vec<Song>> {
        songs::get_by_playlist(&self.pool, playlist_id).await
    }

    async fn create_song(&self, playlist_id: PlaylistId, song: CreateSong) -> Result<Song> {
        songs::create(&self.pool, playlist_id, song).await
    }
}

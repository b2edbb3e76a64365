use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::songs;

fn from_row(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        songs: None,
    }
}

/// Get all playlists in id order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, name, created_at, updated_at
        FROM playlists
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Get playlist by ID
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, name, created_at, updated_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// Get playlist with all songs
pub async fn get_with_songs(pool: &SqlitePool, id: PlaylistId) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    playlist.songs = Some(songs::get_by_playlist(pool, id).await?);

    Ok(Some(playlist))
}

/// Create new playlist
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let result = sqlx::query("INSERT INTO playlists (name) VALUES (?)")
        .bind(&playlist.name)
        .execute(pool)
        .await?;

    let id = PlaylistId::new(result.last_insert_rowid());

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| MixtapeError::storage("Failed to retrieve created playlist"))
}

/// Rename playlist
pub async fn update(pool: &SqlitePool, id: PlaylistId, playlist: UpdatePlaylist) -> Result<Playlist> {
    let result = sqlx::query(
        "UPDATE playlists SET name = ?, updated_at = datetime('now') WHERE id = ?",
    )
    .bind(&playlist.name)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::PlaylistNotFound(id));
    }

    get_by_id(pool, id)
        .await?
        .ok_or(MixtapeError::PlaylistNotFound(id))
}

/// Delete playlist (songs are removed by the foreign key cascade)
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(MixtapeError::PlaylistNotFound(id));
    }

    Ok(())
}

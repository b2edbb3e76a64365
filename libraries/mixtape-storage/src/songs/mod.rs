use mixtape_core::{error::Result, types::*, MixtapeError};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn from_row(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        playlist_id: row.get("playlist_id"),
        title: row.get("title"),
        artist: row.get("artist"),
        position: row.get("position"),
        created_at: row.get("created_at"),
    }
}

/// Get songs of a playlist in position order
pub async fn get_by_playlist(pool: &SqlitePool, playlist_id: PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        r#"
        SELECT id, playlist_id, title, artist, position, created_at
        FROM songs
        WHERE playlist_id = ?
        ORDER BY position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

/// Append a song to the end of a playlist
///
/// Existence check, next position and insert run as one statement, so the
/// write lock is taken before `MAX(position)` is read and concurrent appends
/// queue on the busy timeout instead of failing. The playlist's `updated_at`
/// is bumped by the `songs_touch_playlist` trigger.
pub async fn create(pool: &SqlitePool, playlist_id: PlaylistId, song: CreateSong) -> Result<Song> {
    let row = sqlx::query(
        r#"
        INSERT INTO songs (playlist_id, title, artist, position)
        SELECT p.id, ?, ?,
               COALESCE((SELECT MAX(s.position) FROM songs s WHERE s.playlist_id = p.id), 0) + 1
        FROM playlists p
        WHERE p.id = ?
        RETURNING id, playlist_id, title, artist, position, created_at
        "#,
    )
    .bind(&song.title)
    .bind(&song.artist)
    .bind(playlist_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref()
        .map(from_row)
        .ok_or(MixtapeError::PlaylistNotFound(playlist_id))
}

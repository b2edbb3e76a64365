//! Integration tests for playlists vertical slice
//!
//! Tests playlist operations including:
//! - CRUD round trips
//! - Strict not-found behavior for update and delete
//! - Stable id ordering of the collection
//! - Cascade of songs when a playlist is deleted


use mixtape_core::{types::*, MixtapeError, StorageContext};
use mixtape_storage::LocalStorageContext;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = mixtape_storage::playlists::create(
        pool,
        CreatePlaylist {
            name: "Road Trip".to_string(),
        },
    )
    .await
    .expect("Failed to create playlist");

    assert_eq!(playlist.name, "Road Trip");
    assert!(playlist.songs.is_none());
    assert!(!playlist.created_at.is_empty());

    let retrieved = mixtape_storage::playlists::get_by_id(pool, playlist.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(retrieved, playlist);
}

#[tokio::test]
async fn test_get_missing_playlist_returns_none() {
    let test_db = TestDb::new().await;

    let missing = mixtape_storage::playlists::get_by_id(test_db.pool(), PlaylistId::new(404))
        .await
        .unwrap();

    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_all_is_ordered_by_id() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    // Names deliberately out of alphabetical order
    let c = create_test_playlist(pool, "Chill").await;
    let a = create_test_playlist(pool, "Acoustic").await;
    let b = create_test_playlist(pool, "Bangers").await;

    let all = mixtape_storage::playlists::get_all(pool).await.unwrap();
    let ids: Vec<_> = all.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![c.id, a.id, b.id]);
}

#[tokio::test]
async fn test_update_changes_only_name() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let original = create_test_playlist(pool, "Road Trip").await;

    let updated = mixtape_storage::playlists::update(
        pool,
        original.id,
        UpdatePlaylist {
            name: "Summer Mix".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Summer Mix");
    assert_eq!(updated.created_at, original.created_at);
}

#[tokio::test]
async fn test_update_missing_playlist_fails() {
    let test_db = TestDb::new().await;

    let result = mixtape_storage::playlists::update(
        test_db.pool(),
        PlaylistId::new(12),
        UpdatePlaylist {
            name: "Nope".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(MixtapeError::PlaylistNotFound(id)) if id.as_i64() == 12));
}

#[tokio::test]
async fn test_delete_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let keep = create_test_playlist(pool, "Keep").await;
    let gone = create_test_playlist(pool, "Gone").await;

    mixtape_storage::playlists::delete(pool, gone.id).await.unwrap();

    assert!(mixtape_storage::playlists::get_by_id(pool, gone.id)
        .await
        .unwrap()
        .is_none());

    let all = mixtape_storage::playlists::get_all(pool).await.unwrap();
    assert_eq!(all, vec![keep]);
}

#[tokio::test]
async fn test_delete_missing_playlist_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Once").await;
    mixtape_storage::playlists::delete(pool, playlist.id).await.unwrap();

    let second = mixtape_storage::playlists::delete(pool, playlist.id).await;
    assert!(second.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_test_playlist(pool, "First").await;
    mixtape_storage::playlists::delete(pool, first.id).await.unwrap();

    let second = create_test_playlist(pool, "Second").await;
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_delete_cascades_to_songs() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist = create_test_playlist(pool, "Doomed").await;
    create_test_song(pool, playlist.id, "One").await;
    create_test_song(pool, playlist.id, "Two").await;

    mixtape_storage::playlists::delete(pool, playlist.id).await.unwrap();

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_blank_name_rejected_by_schema() {
    let test_db = TestDb::new().await;

    let result = mixtape_storage::playlists::create(
        test_db.pool(),
        CreatePlaylist {
            name: "   ".to_string(),
        },
    )
    .await;

    assert!(matches!(result, Err(MixtapeError::Database(_))));
}

#[tokio::test]
async fn test_storage_context_round_trip() {
    let test_db = TestDb::new().await;
    let storage = LocalStorageContext::new(test_db.pool().clone());

    let created = storage
        .create_playlist(CreatePlaylist {
            name: "Road Trip".to_string(),
        })
        .await
        .unwrap();

    let found = storage.find_playlist(created.id).await.unwrap();
    assert_eq!(found.name, "Road Trip");

    storage.delete_playlist(created.id).await.unwrap();

    let err = storage.find_playlist(created.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(storage.get_all_playlists().await.unwrap().is_empty());
}

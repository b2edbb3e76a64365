/// Songs nested under a playlist
use crate::{
    error::{Result, ServerError},
    extract::{Permitted, PlaylistPath, ResponseFormat},
    response::ActionResponse,
    state::AppState,
    views,
};
use axum::{extract::State, http::StatusCode};
use mixtape_core::SongParams;

/// POST /playlists/:id/songs
/// Append a song to a playlist
pub async fn create_song(
    PlaylistPath(playlist_id): PlaylistPath,
    State(app_state): State<AppState>,
    format: ResponseFormat,
    params: std::result::Result<Permitted<SongParams>, ServerError>,
) -> Result<ActionResponse> {
    let playlist = app_state.db.find_playlist(playlist_id).await?;

    let Permitted(params) = params?;
    let create = params.into_create()?;
    let song = app_state.db.create_song(playlist_id, create).await?;

    tracing::info!(
        playlist_id = %playlist_id,
        song_id = %song.id,
        position = song.position,
        "Added song"
    );

    // Songs have no page of their own
    let location = Some(views::playlists::song_path(&playlist, &song));
    match format {
        ResponseFormat::Json => ActionResponse::json(StatusCode::CREATED, location, &song),
        ResponseFormat::Html | ResponseFormat::Script => Ok(ActionResponse::fragment(
            StatusCode::CREATED,
            location,
            views::playlists::song_created(&playlist, &song),
        )),
    }
}

/// Playlist resource actions
use crate::{
    error::{Result, ServerError},
    extract::{Permitted, PlaylistPath, ResponseFormat},
    response::ActionResponse,
    state::AppState,
    views,
};
use axum::{extract::State, http::StatusCode};
use mixtape_core::PlaylistParams;

/// Where `destroy` sends the client afterwards
pub const PLAYLISTS_PATH: &str = "/playlists";

/// GET /playlists (also / and /all_playlists)
/// List every playlist in id order
pub async fn list_playlists(
    State(app_state): State<AppState>,
    format: ResponseFormat,
) -> Result<ActionResponse> {
    let playlists = app_state.db.get_all_playlists().await?;

    match format {
        ResponseFormat::Json => ActionResponse::json(StatusCode::OK, None, &playlists),
        ResponseFormat::Html | ResponseFormat::Script => {
            Ok(ActionResponse::Page(views::playlists::index(&playlists)))
        }
    }
}

/// GET /playlists/:id
/// Show one playlist with its songs
pub async fn get_playlist(
    PlaylistPath(id): PlaylistPath,
    State(app_state): State<AppState>,
    format: ResponseFormat,
) -> Result<ActionResponse> {
    let playlist = app_state
        .db
        .get_playlist_with_songs(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("Playlist not found: {}", id)))?;

    match format {
        ResponseFormat::Json => ActionResponse::json(StatusCode::OK, None, &playlist),
        ResponseFormat::Html | ResponseFormat::Script => {
            Ok(ActionResponse::Page(views::playlists::show(&playlist)))
        }
    }
}

/// POST /playlists
/// Create a playlist from the permitted `playlist` params
pub async fn create_playlist(
    State(app_state): State<AppState>,
    format: ResponseFormat,
    Permitted(params): Permitted<PlaylistParams>,
) -> Result<ActionResponse> {
    let create = params.into_create()?;
    let playlist = app_state.db.create_playlist(create).await?;

    tracing::info!(id = %playlist.id, name = %playlist.name, "Created playlist");

    let location = Some(views::playlists::playlist_path(&playlist));
    match format {
        ResponseFormat::Json => ActionResponse::json(StatusCode::CREATED, location, &playlist),
        ResponseFormat::Html | ResponseFormat::Script => Ok(ActionResponse::fragment(
            StatusCode::CREATED,
            location,
            views::playlists::created(&playlist),
        )),
    }
}

/// PATCH/PUT /playlists/:id
/// Rename a playlist
///
/// The playlist must exist before its params are looked at, so an unknown
/// id is a 404 even when the body is also malformed.
pub async fn update_playlist(
    PlaylistPath(id): PlaylistPath,
    State(app_state): State<AppState>,
    format: ResponseFormat,
    params: std::result::Result<Permitted<PlaylistParams>, ServerError>,
) -> Result<ActionResponse> {
    app_state.db.find_playlist(id).await?;

    let Permitted(params) = params?;
    let update = params.into_update()?;
    let playlist = app_state.db.update_playlist(id, update).await?;

    tracing::info!(id = %playlist.id, name = %playlist.name, "Renamed playlist");

    match format {
        ResponseFormat::Json => ActionResponse::json(StatusCode::OK, None, &playlist),
        ResponseFormat::Html | ResponseFormat::Script => Ok(ActionResponse::fragment(
            StatusCode::OK,
            None,
            views::playlists::updated(&playlist),
        )),
    }
}

/// DELETE /playlists/:id
/// Delete a playlist and its songs, then go back to the list
pub async fn delete_playlist(
    PlaylistPath(id): PlaylistPath,
    State(app_state): State<AppState>,
) -> Result<ActionResponse> {
    app_state.db.find_playlist(id).await?;
    app_state.db.delete_playlist(id).await?;

    tracing::info!(id = %id, "Deleted playlist");

    Ok(ActionResponse::Redirect(PLAYLISTS_PATH.to_string()))
}

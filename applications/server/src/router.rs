/// HTTP routes
use crate::{api, error::ServerError, state::AppState};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Root and legacy aliases for the playlist index
        .route("/", get(api::playlists::list_playlists))
        .route("/all_playlists", get(api::playlists::list_playlists))
        // Playlists
        .route(
            "/playlists",
            get(api::playlists::list_playlists).post(api::playlists::create_playlist),
        )
        .route(
            "/playlists/:id",
            get(api::playlists::get_playlist)
                .patch(api::playlists::update_playlist)
                .put(api::playlists::update_playlist)
                .delete(api::playlists::delete_playlist),
        )
        // Songs nested under their playlist
        .route("/playlists/:id/songs", post(api::songs::create_song))
        .route("/health", get(api::health::health))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}

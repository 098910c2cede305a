//! OpenAPI documentation for the playlist API.
//!
//! The generated document is served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "tunedeck API",
        description = "Playlist backend: token-based login, playlist CRUD and track management."
    ),
    paths(
        api::handlers::auth::login,
        api::handlers::playlists::get_playlists,
        api::handlers::playlists::create_playlist,
        api::handlers::playlists::edit_playlist,
        api::handlers::playlists::delete_playlist,
        api::handlers::playlists::get_playlist_tracks,
        api::handlers::playlists::add_track_to_playlist,
        api::handlers::playlists::remove_track_from_playlist,
        api::handlers::tracks::get_available_tracks,
    ),
    components(schemas(
        api::models::auth::LoginRequest,
        api::models::auth::LoginResponse,
        api::models::playlists::PlaylistSummary,
        api::models::playlists::PlaylistsResponse,
        api::models::playlists::PlaylistUpsert,
        api::models::tracks::TrackResponse,
        api::models::tracks::TracksResponse,
        api::models::tracks::TrackAdd,
    )),
    tags(
        (name = "authentication", description = "Session token issuance"),
        (name = "playlists", description = "Playlist management for the authenticated owner"),
        (name = "tracks", description = "Track catalog and playlist membership"),
    )
)]
pub struct ApiDoc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    api::models::{
        auth::TokenQuery,
        playlists::{PlaylistUpsert, PlaylistsResponse},
        tracks::{TrackAdd, TracksResponse},
    },
    errors::Error,
    types::{PlaylistId, TrackId, UserId},
};

/// The caller's playlists, refreshed from storage.
async fn playlists_response(state: &AppState, user_id: UserId) -> Result<Json<PlaylistsResponse>, Error> {
    let records = state.playlists.playlists_for_user(user_id).await?;
    Ok(Json(PlaylistsResponse::from_records(records)))
}

/// The playlist's current tracks, refreshed from storage.
async fn tracks_response(state: &AppState, playlist: PlaylistId) -> Result<Json<TracksResponse>, Error> {
    let records = state.tracks.tracks_in_playlist(playlist).await?;
    Ok(Json(TracksResponse::from_records(records)))
}

/// List the caller's playlists
#[utoipa::path(
    get,
    path = "/playlists",
    params(TokenQuery),
    tag = "playlists",
    responses(
        (status = 200, description = "All playlists owned by the caller", body = PlaylistsResponse),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_playlists(State(state): State<AppState>, Query(query): Query<TokenQuery>) -> Result<Json<PlaylistsResponse>, Error> {
    let user_id = state.access.require_user(&query.token)?;
    playlists_response(&state, user_id).await
}

/// Create a playlist
#[utoipa::path(
    post,
    path = "/playlists",
    params(TokenQuery),
    request_body = PlaylistUpsert,
    tag = "playlists",
    responses(
        (status = 200, description = "Playlist created; refreshed list", body = PlaylistsResponse),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_playlist(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
    Json(request): Json<PlaylistUpsert>,
) -> Result<Json<PlaylistsResponse>, Error> {
    let user_id = state.access.require_user(&query.token)?;

    let playlist_id = state.playlists.create(user_id, &request.name).await?;
    tracing::info!(user_id, playlist_id, "playlist created");

    playlists_response(&state, user_id).await
}

/// Rename a playlist (owner only)
#[utoipa::path(
    put,
    path = "/playlists/{id}",
    params(TokenQuery, ("id" = i64, Path, description = "Playlist to rename")),
    request_body = PlaylistUpsert,
    tag = "playlists",
    responses(
        (status = 200, description = "Playlist renamed; refreshed list", body = PlaylistsResponse),
        (status = 401, description = "Caller does not own the playlist"),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn edit_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<PlaylistId>,
    Query(query): Query<TokenQuery>,
    Json(request): Json<PlaylistUpsert>,
) -> Result<Json<PlaylistsResponse>, Error> {
    let user_id = state.access.authorize(&query.token, playlist_id).await?;

    state.playlists.rename(playlist_id, &request.name).await?;

    playlists_response(&state, user_id).await
}

/// Delete a playlist (owner only)
#[utoipa::path(
    delete,
    path = "/playlists/{id}",
    params(TokenQuery, ("id" = i64, Path, description = "Playlist to delete")),
    tag = "playlists",
    responses(
        (status = 200, description = "Playlist deleted; refreshed list", body = PlaylistsResponse),
        (status = 401, description = "Caller does not own the playlist"),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<PlaylistId>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<PlaylistsResponse>, Error> {
    let user_id = state.access.authorize(&query.token, playlist_id).await?;

    state.playlists.delete(playlist_id).await?;
    tracing::info!(user_id, playlist_id, "playlist deleted");

    playlists_response(&state, user_id).await
}

/// List the tracks in a playlist (owner only)
#[utoipa::path(
    get,
    path = "/playlists/{id}/tracks",
    params(TokenQuery, ("id" = i64, Path, description = "Playlist to list")),
    tag = "playlists",
    responses(
        (status = 200, description = "Tracks in the playlist", body = TracksResponse),
        (status = 401, description = "Caller does not own the playlist"),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_playlist_tracks(
    State(state): State<AppState>,
    Path(playlist_id): Path<PlaylistId>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<TracksResponse>, Error> {
    state.access.authorize(&query.token, playlist_id).await?;
    tracks_response(&state, playlist_id).await
}

/// Add a track to a playlist (owner only)
#[utoipa::path(
    post,
    path = "/playlists/{id}/tracks",
    params(TokenQuery, ("id" = i64, Path, description = "Playlist to add to")),
    request_body = TrackAdd,
    tag = "playlists",
    responses(
        (status = 200, description = "Track added; refreshed track list", body = TracksResponse),
        (status = 401, description = "Caller does not own the playlist"),
        (status = 404, description = "Token does not resolve to a user, or track unknown"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn add_track_to_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<PlaylistId>,
    Query(query): Query<TokenQuery>,
    Json(request): Json<TrackAdd>,
) -> Result<Json<TracksResponse>, Error> {
    let user_id = state.access.authorize(&query.token, playlist_id).await?;

    state.tracks.add_to_playlist(playlist_id, request.id).await?;
    tracing::info!(user_id, playlist_id, track_id = request.id, "track added to playlist");

    tracks_response(&state, playlist_id).await
}

/// Remove a track from a playlist (owner only)
#[utoipa::path(
    delete,
    path = "/playlists/{id}/tracks/{trackId}",
    params(
        TokenQuery,
        ("id" = i64, Path, description = "Playlist to remove from"),
        ("trackId" = i64, Path, description = "Track to remove"),
    ),
    tag = "playlists",
    responses(
        (status = 200, description = "Track removed; refreshed track list", body = TracksResponse),
        (status = 401, description = "Caller does not own the playlist"),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn remove_track_from_playlist(
    State(state): State<AppState>,
    Path((playlist_id, track_id)): Path<(PlaylistId, TrackId)>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<TracksResponse>, Error> {
    let user_id = state.access.authorize(&query.token, playlist_id).await?;

    state.tracks.remove_from_playlist(playlist_id, track_id).await?;
    tracing::info!(user_id, playlist_id, track_id, "track removed from playlist");

    tracks_response(&state, playlist_id).await
}

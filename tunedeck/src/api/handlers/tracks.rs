use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{AppState, api::models::tracks::TracksResponse, errors::Error, types::PlaylistId};

/// Query for the track catalog: which playlist the caller is picking
/// candidates for, plus the session token.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableTracksQuery {
    /// Playlist the returned tracks are not yet part of.
    #[serde(rename = "forPlaylist")]
    pub for_playlist: PlaylistId,
    /// Session token obtained from `POST /login`.
    pub token: String,
}

/// Catalog tracks not yet in the given playlist (owner only)
#[utoipa::path(
    get,
    path = "/tracks",
    params(AvailableTracksQuery),
    tag = "tracks",
    responses(
        (status = 200, description = "Tracks available to add", body = TracksResponse),
        (status = 401, description = "Caller does not own the playlist"),
        (status = 404, description = "Token does not resolve to a user"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_available_tracks(
    State(state): State<AppState>,
    Query(query): Query<AvailableTracksQuery>,
) -> Result<Json<TracksResponse>, Error> {
    state.access.authorize(&query.token, query.for_playlist).await?;

    let records = state.tracks.tracks_not_in_playlist(query.for_playlist).await?;
    Ok(Json(TracksResponse::from_records(records)))
}

//! Playlist collection responses and upsert requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::models::tracks::TracksResponse;
use crate::store::PlaylistRecord;
use crate::types::PlaylistId;

/// One playlist in a collection response.
///
/// `owner` is always true and `tracks` always empty here: only the caller's
/// own playlists are listed, and the client fetches tracks separately via
/// `GET /playlists/{id}/tracks`. Both fields stay in the payload because the
/// client expects them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    pub owner: bool,
    pub tracks: TracksResponse,
    /// Summed duration of the member tracks, in seconds.
    pub playlist_length: u32,
}

impl From<PlaylistRecord> for PlaylistSummary {
    fn from(record: PlaylistRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            owner: true,
            tracks: TracksResponse::default(),
            playlist_length: record.duration,
        }
    }
}

/// All playlists owned by the caller, plus their combined duration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaylistsResponse {
    pub playlists: Vec<PlaylistSummary>,
    /// Total duration across all playlists, in seconds.
    pub length: u32,
}

impl PlaylistsResponse {
    pub fn from_records(records: Vec<PlaylistRecord>) -> Self {
        let length = records.iter().map(|r| r.duration).sum();
        Self {
            playlists: records.into_iter().map(PlaylistSummary::from).collect(),
            length,
        }
    }
}

/// Create/rename request: the playlist name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaylistUpsert {
    pub name: String,
}

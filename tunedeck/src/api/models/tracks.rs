//! Track responses and membership requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::TrackRecord;
use crate::types::TrackId;

/// One track as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub id: TrackId,
    pub title: String,
    pub performer: String,
    /// Duration in seconds.
    pub duration: u32,
    pub album: Option<String>,
    pub playcount: u32,
    pub publication_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub offline_available: bool,
}

impl From<TrackRecord> for TrackResponse {
    fn from(record: TrackRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            performer: record.performer,
            duration: record.duration,
            album: record.album,
            playcount: record.playcount,
            publication_date: record.publication_date,
            description: record.description,
            offline_available: record.offline_available,
        }
    }
}

/// Collection wrapper the client expects around track lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TracksResponse {
    pub tracks: Vec<TrackResponse>,
}

impl TracksResponse {
    pub fn from_records(records: Vec<TrackRecord>) -> Self {
        Self {
            tracks: records.into_iter().map(TrackResponse::from).collect(),
        }
    }
}

/// Request to add a track to a playlist: the catalog track ID.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrackAdd {
    pub id: TrackId,
}

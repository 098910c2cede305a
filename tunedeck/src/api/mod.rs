//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: axum route handlers for all endpoints
//! - **[`models`]**: request/response data structures for API communication
//!
//! # Surface
//!
//! - **Authentication** (`POST /login`): exchanges credentials for a bearer
//!   token.
//! - **Playlists** (`/playlists`, `/playlists/{id}`): list, create, rename
//!   and delete the caller's playlists.
//! - **Playlist tracks** (`/playlists/{id}/tracks`,
//!   `/playlists/{id}/tracks/{trackId}`): list, add and remove tracks.
//! - **Tracks** (`GET /tracks?forPlaylist=`): catalog tracks not yet in a
//!   playlist.
//!
//! Authenticated routes take the bearer token as a `token` query parameter;
//! that is the wire contract the client speaks. All endpoints carry `utoipa`
//! annotations, and the aggregated document is served at
//! `/api-docs/openapi.json`.

pub mod handlers;
pub mod models;

//! API request and response data models.
//!
//! These structures define the public API contract and are kept separate
//! from the storage records so the wire format and the storage layer can
//! evolve independently. Field names follow the client's camelCase wire
//! format where they differ from Rust convention.
//!
//! - [`auth`]: login payloads and the shared `token` query parameter
//! - [`playlists`]: playlist collection/summary responses and upserts
//! - [`tracks`]: track responses and membership requests

pub mod auth;
pub mod playlists;
pub mod tracks;

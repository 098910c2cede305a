//! Storage seam between the service core and whatever persists the data.
//!
//! The auth core and the API handlers never talk to a database directly; they
//! consume the narrow async traits defined here. Each trait covers exactly
//! the queries its consumers need:
//!
//! - [`CredentialStore`]: username → credential record, for login.
//! - [`PlaylistStore`]: ownership lookup plus playlist CRUD.
//! - [`TrackStore`]: track membership queries and mutation per playlist.
//!
//! Failures surface as [`StoreError`], which application code converts to a
//! domain error at the point of use. A "not found" is the only recoverable
//! variant; everything else is carried opaquely.
//!
//! [`memory::MemoryStore`] implements all three traits over concurrent maps
//! and is what the binary and the test suite run against.

pub mod memory;

pub use memory::MemoryStore;

use crate::types::{PlaylistId, TrackId, UserId};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Unified error type for storage operations that application code can handle
#[derive(Error, Debug)]
pub enum StoreError {
    /// Entity not found by the given identifier
    #[error("entity not found")]
    NotFound,

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Type alias for storage operation results
pub type Result<T> = std::result::Result<T, StoreError>;

/// Stored login record for one account. Immutable once fetched.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    /// SHA3-512 digest of the password, lowercase hex.
    pub password_hash: String,
}

/// One playlist as the storage layer reports it.
#[derive(Debug, Clone)]
pub struct PlaylistRecord {
    pub id: PlaylistId,
    pub name: String,
    /// Summed duration of the member tracks, in seconds.
    pub duration: u32,
}

/// One track from the catalog.
#[derive(Debug, Clone)]
pub struct TrackRecord {
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

/// Credential lookup for login.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the credential record for a username.
    /// Errors with [`StoreError::NotFound`] when no such account exists.
    async fn credential(&self, username: &str) -> Result<Credential>;
}

/// Playlist ownership and CRUD.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Owning user of a playlist. Errors with [`StoreError::NotFound`] when
    /// the playlist does not exist; ownership is re-fetched per check, never
    /// cached by callers.
    async fn owner_id(&self, playlist: PlaylistId) -> Result<UserId>;

    /// All playlists owned by a user.
    async fn playlists_for_user(&self, user: UserId) -> Result<Vec<PlaylistRecord>>;

    /// Create an empty playlist and return its ID.
    async fn create(&self, owner: UserId, name: &str) -> Result<PlaylistId>;

    /// Rename an existing playlist.
    async fn rename(&self, playlist: PlaylistId, name: &str) -> Result<()>;

    /// Delete a playlist and its track memberships.
    async fn delete(&self, playlist: PlaylistId) -> Result<()>;
}

/// Track membership queries and mutation.
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Tracks currently in the playlist.
    async fn tracks_in_playlist(&self, playlist: PlaylistId) -> Result<Vec<TrackRecord>>;

    /// Catalog tracks NOT in the playlist (candidates to add).
    async fn tracks_not_in_playlist(&self, playlist: PlaylistId) -> Result<Vec<TrackRecord>>;

    /// Add a catalog track to the playlist. Adding a track that is already a
    /// member is a no-op.
    async fn add_to_playlist(&self, playlist: PlaylistId, track: TrackId) -> Result<()>;

    /// Remove a track from the playlist.
    async fn remove_from_playlist(&self, playlist: PlaylistId, track: TrackId) -> Result<()>;
}

//! In-memory storage backed by concurrent maps.
//!
//! Backs the narrow storage traits with `DashMap`s so the whole backend runs
//! without external infrastructure. Accounts and the track catalog are seeded
//! from configuration at startup; playlists are created through the API.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::config::Config;
use crate::store::{
    Credential, CredentialStore, PlaylistRecord, PlaylistStore, Result, StoreError, TrackRecord,
    TrackStore,
};
use crate::types::{PlaylistId, TrackId, UserId};

#[derive(Debug)]
struct PlaylistEntry {
    owner: UserId,
    name: String,
    tracks: Vec<TrackId>,
}

/// Concurrent in-memory implementation of all three storage traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    credentials: DashMap<String, Credential>,
    playlists: DashMap<PlaylistId, PlaylistEntry>,
    catalog: DashMap<TrackId, TrackRecord>,
    next_playlist_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            credentials: DashMap::new(),
            playlists: DashMap::new(),
            catalog: DashMap::new(),
            next_playlist_id: AtomicI64::new(1),
        }
    }

    /// Build a store seeded with the accounts and track catalog from the
    /// configuration file.
    pub fn from_config(config: &Config) -> Self {
        let store = Self::new();
        for account in &config.accounts {
            store.seed_account(account.id, &account.username, &account.password_hash);
        }
        for track in &config.catalog {
            store.seed_track(track.clone().into());
        }
        store
    }

    /// Register an account. The hash must be a SHA3-512 hex digest.
    pub fn seed_account(&self, user_id: UserId, username: &str, password_hash: &str) {
        self.credentials.insert(
            username.to_string(),
            Credential {
                user_id,
                password_hash: password_hash.to_string(),
            },
        );
    }

    /// Add a track to the catalog.
    pub fn seed_track(&self, track: TrackRecord) {
        self.catalog.insert(track.id, track);
    }

    fn playlist_duration(&self, tracks: &[TrackId]) -> u32 {
        tracks
            .iter()
            .filter_map(|id| self.catalog.get(id).map(|t| t.duration))
            .sum()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn credential(&self, username: &str) -> Result<Credential> {
        self.credentials
            .get(username)
            .map(|c| c.value().clone())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl PlaylistStore for MemoryStore {
    async fn owner_id(&self, playlist: PlaylistId) -> Result<UserId> {
        self.playlists
            .get(&playlist)
            .map(|p| p.owner)
            .ok_or(StoreError::NotFound)
    }

    async fn playlists_for_user(&self, user: UserId) -> Result<Vec<PlaylistRecord>> {
        let mut records: Vec<PlaylistRecord> = self
            .playlists
            .iter()
            .filter(|entry| entry.owner == user)
            .map(|entry| PlaylistRecord {
                id: *entry.key(),
                name: entry.name.clone(),
                duration: self.playlist_duration(&entry.tracks),
            })
            .collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn create(&self, owner: UserId, name: &str) -> Result<PlaylistId> {
        let id = self.next_playlist_id.fetch_add(1, Ordering::Relaxed);
        self.playlists.insert(
            id,
            PlaylistEntry {
                owner,
                name: name.to_string(),
                tracks: Vec::new(),
            },
        );
        Ok(id)
    }

    async fn rename(&self, playlist: PlaylistId, name: &str) -> Result<()> {
        let mut entry = self.playlists.get_mut(&playlist).ok_or(StoreError::NotFound)?;
        entry.name = name.to_string();
        Ok(())
    }

    async fn delete(&self, playlist: PlaylistId) -> Result<()> {
        self.playlists
            .remove(&playlist)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl TrackStore for MemoryStore {
    async fn tracks_in_playlist(&self, playlist: PlaylistId) -> Result<Vec<TrackRecord>> {
        let member_ids = self
            .playlists
            .get(&playlist)
            .map(|p| p.tracks.clone())
            .ok_or(StoreError::NotFound)?;
        Ok(member_ids
            .iter()
            .filter_map(|id| self.catalog.get(id).map(|t| t.value().clone()))
            .collect())
    }

    async fn tracks_not_in_playlist(&self, playlist: PlaylistId) -> Result<Vec<TrackRecord>> {
        let member_ids = self
            .playlists
            .get(&playlist)
            .map(|p| p.tracks.clone())
            .ok_or(StoreError::NotFound)?;
        let mut tracks: Vec<TrackRecord> = self
            .catalog
            .iter()
            .filter(|entry| !member_ids.contains(entry.key()))
            .map(|entry| entry.value().clone())
            .collect();
        tracks.sort_by_key(|t| t.id);
        Ok(tracks)
    }

    async fn add_to_playlist(&self, playlist: PlaylistId, track: TrackId) -> Result<()> {
        if !self.catalog.contains_key(&track) {
            return Err(StoreError::NotFound);
        }
        let mut entry = self.playlists.get_mut(&playlist).ok_or(StoreError::NotFound)?;
        if !entry.tracks.contains(&track) {
            entry.tracks.push(track);
        }
        Ok(())
    }

    async fn remove_from_playlist(&self, playlist: PlaylistId, track: TrackId) -> Result<()> {
        let mut entry = self.playlists.get_mut(&playlist).ok_or(StoreError::NotFound)?;
        entry.tracks.retain(|id| *id != track);
        Ok(())
    }
}

//! Token resolution and ownership gating.

use std::sync::Arc;

use tracing::debug;

use crate::auth::session::SessionStore;
use crate::errors::Error;
use crate::store::PlaylistStore;
use crate::types::{NO_USER, PlaylistId, UserId};

/// Decides who a token belongs to and whether they may touch a playlist.
///
/// Token resolution collapses every failure mode into the [`NO_USER`]
/// sentinel; ownership checks fail closed, treating any lookup failure as
/// absence of ownership. Ownership is re-fetched from storage on every check,
/// never cached.
pub struct AccessController {
    sessions: Arc<SessionStore>,
    playlists: Arc<dyn PlaylistStore>,
}

impl AccessController {
    pub fn new(sessions: Arc<SessionStore>, playlists: Arc<dyn PlaylistStore>) -> Self {
        Self { sessions, playlists }
    }

    /// Resolve a token to a user ID, or [`NO_USER`] when it cannot be
    /// resolved to a strictly positive identity. Callers must treat
    /// [`NO_USER`] as unauthenticated and deny access.
    pub fn user_id_from_token(&self, token: &str) -> UserId {
        match self.sessions.resolve(token) {
            Ok(user_id) if user_id > NO_USER => user_id,
            Ok(_) | Err(_) => NO_USER,
        }
    }

    /// Resolve a token or fail with [`Error::UnknownToken`]. For operations
    /// that need an identity but no particular resource.
    pub fn require_user(&self, token: &str) -> Result<UserId, Error> {
        match self.user_id_from_token(token) {
            NO_USER => Err(Error::UnknownToken),
            user_id => Ok(user_id),
        }
    }

    /// Whether `user_id` owns the playlist. True only when both the caller's
    /// ID and the recorded owner are strictly positive and equal; any lookup
    /// failure means false.
    pub async fn has_playlist_ownership(&self, user_id: UserId, playlist: PlaylistId) -> bool {
        let owner_id = match self.playlists.owner_id(playlist).await {
            Ok(owner_id) => owner_id,
            Err(err) => {
                debug!(playlist, error = %err, "ownership lookup failed, denying access");
                return false;
            }
        };
        user_id > 0 && owner_id > 0 && user_id == owner_id
    }

    /// The gate in front of every playlist/track mutation: resolve the
    /// token, then require ownership of the playlist.
    pub async fn authorize(&self, token: &str, playlist: PlaylistId) -> Result<UserId, Error> {
        let user_id = self.require_user(token)?;
        if !self.has_playlist_ownership(user_id, playlist).await {
            return Err(Error::Unauthorized { playlist });
        }
        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::auth::token::TokenGenerator;
    use crate::store::{PlaylistRecord, Result as StoreResult, StoreError};

    /// Playlist 456 owned by user 124; playlist 99 recorded with owner 0;
    /// playlist 500 errors on lookup; everything else is absent.
    struct FixedOwners;

    #[async_trait]
    impl PlaylistStore for FixedOwners {
        async fn owner_id(&self, playlist: PlaylistId) -> StoreResult<UserId> {
            match playlist {
                456 => Ok(124),
                99 => Ok(0),
                500 => Err(StoreError::Other(anyhow::anyhow!("storage unavailable"))),
                _ => Err(StoreError::NotFound),
            }
        }

        async fn playlists_for_user(&self, _user: UserId) -> StoreResult<Vec<PlaylistRecord>> {
            Ok(Vec::new())
        }

        async fn create(&self, _owner: UserId, _name: &str) -> StoreResult<PlaylistId> {
            unimplemented!("not used by these tests")
        }

        async fn rename(&self, _playlist: PlaylistId, _name: &str) -> StoreResult<()> {
            unimplemented!("not used by these tests")
        }

        async fn delete(&self, _playlist: PlaylistId) -> StoreResult<()> {
            unimplemented!("not used by these tests")
        }
    }

    fn controller() -> (Arc<SessionStore>, AccessController) {
        let sessions = Arc::new(SessionStore::new(TokenGenerator::new()));
        let access = AccessController::new(Arc::clone(&sessions), Arc::new(FixedOwners));
        (sessions, access)
    }

    #[test]
    fn unissued_token_resolves_to_sentinel() {
        let (_sessions, access) = controller();
        assert_eq!(access.user_id_from_token("abc"), NO_USER);
    }

    #[test]
    fn issued_token_resolves_to_positive_user_id() {
        let (sessions, access) = controller();
        let session = sessions.create_session(124, "eve");
        assert_eq!(access.user_id_from_token(&session.token), 124);
    }

    #[tokio::test]
    async fn owner_passes_ownership_check() {
        let (_sessions, access) = controller();
        assert!(access.has_playlist_ownership(124, 456).await);
    }

    #[tokio::test]
    async fn non_owner_fails_ownership_check() {
        let (_sessions, access) = controller();
        assert!(!access.has_playlist_ownership(142, 456).await);
    }

    #[tokio::test]
    async fn non_positive_ids_never_own_anything() {
        let (_sessions, access) = controller();
        // caller sentinel
        assert!(!access.has_playlist_ownership(0, 456).await);
        assert!(!access.has_playlist_ownership(-1, 456).await);
        // recorded owner is the sentinel: equality must not grant access
        assert!(!access.has_playlist_ownership(0, 99).await);
    }

    #[tokio::test]
    async fn lookup_failures_fail_closed() {
        let (_sessions, access) = controller();
        // missing playlist
        assert!(!access.has_playlist_ownership(124, 1).await);
        // storage error
        assert!(!access.has_playlist_ownership(124, 500).await);
    }

    #[tokio::test]
    async fn authorize_distinguishes_unauthenticated_from_unauthorized() {
        let (sessions, access) = controller();

        // never-issued token: unauthenticated
        assert!(matches!(access.authorize("abc", 456).await, Err(Error::UnknownToken)));

        // valid token, wrong owner: unauthorized
        let intruder = sessions.create_session(142, "mallory");
        assert!(matches!(
            access.authorize(&intruder.token, 456).await,
            Err(Error::Unauthorized { playlist: 456 })
        ));

        // valid token, owner: allowed
        let owner = sessions.create_session(124, "eve");
        assert_eq!(access.authorize(&owner.token, 456).await.unwrap(), 124);
    }
}

//! The token → identity session registry.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::auth::token::TokenGenerator;
use crate::errors::Error;
use crate::types::UserId;

/// One authenticated session. Created exactly once per successful login and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque bearer token the client presents on every request.
    pub token: String,
    pub user_id: UserId,
    pub username: String,
}

/// Registry of active sessions, keyed by token.
///
/// Reads (resolution, matching) run concurrently; session creation is rare
/// (one per login) and inserts through the map's entry API, so the collision
/// check and the insert are a single atomic step and a reader can never
/// observe a half-built session. The token → session mapping is injective:
/// collisions cause regeneration, however unlikely 256 bits of entropy make
/// them.
///
/// Sessions are never revoked or expired; a token stays valid for the process
/// lifetime, and a re-login adds another independent session for the same
/// user.
#[derive(Debug, Default)]
pub struct SessionStore {
    generator: TokenGenerator,
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new(generator: TokenGenerator) -> Self {
        Self {
            generator,
            sessions: DashMap::new(),
        }
    }

    /// Issue a session for an authenticated user and return it.
    pub fn create_session(&self, user_id: UserId, username: &str) -> Session {
        loop {
            let token = self.generator.generate();
            match self.sessions.entry(token.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let session = Session {
                        token,
                        user_id,
                        username: username.to_string(),
                    };
                    slot.insert(session.clone());
                    return session;
                }
            }
        }
    }

    /// Resolve a token to its user ID. Exact string equality on the token,
    /// never pattern matching.
    pub fn resolve(&self, token: &str) -> Result<UserId, Error> {
        self.sessions
            .get(token)
            .map(|session| session.user_id)
            .ok_or(Error::UnknownToken)
    }

    /// Whether a session exists for `token` with exactly this user ID.
    pub fn matches(&self, token: &str, user_id: UserId) -> bool {
        self.sessions
            .get(token)
            .map(|session| session.user_id == user_id)
            .unwrap_or(false)
    }

    /// Number of active sessions.
    #[cfg(test)]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(TokenGenerator::new())
    }

    #[test]
    fn created_session_resolves_to_its_user() {
        let sessions = store();
        let session = sessions.create_session(123, "mark");

        assert_eq!(session.user_id, 123);
        assert_eq!(session.username, "mark");
        assert_eq!(sessions.resolve(&session.token).unwrap(), 123);
    }

    #[test]
    fn unissued_token_fails_resolution() {
        let sessions = store();
        assert!(matches!(sessions.resolve("abc"), Err(Error::UnknownToken)));
    }

    #[test]
    fn matches_checks_token_and_user_together() {
        let sessions = store();
        let session = sessions.create_session(123, "mark");

        assert!(sessions.matches(&session.token, 123));
        assert!(!sessions.matches(&session.token, 124));
        assert!(!sessions.matches("never-issued", 123));
    }

    #[test]
    fn relogin_adds_an_independent_session() {
        let sessions = store();
        let first = sessions.create_session(123, "mark");
        let second = sessions.create_session(123, "mark");

        assert_ne!(first.token, second.token);
        assert_eq!(sessions.resolve(&first.token).unwrap(), 123);
        assert_eq!(sessions.resolve(&second.token).unwrap(), 123);
        assert_eq!(sessions.session_count(), 2);
    }

    #[test]
    fn concurrent_logins_never_share_a_token() {
        let sessions = Arc::new(store());
        let mut handles = Vec::new();

        for user in 0..16i64 {
            let sessions = Arc::clone(&sessions);
            handles.push(std::thread::spawn(move || {
                (0..16)
                    .map(|_| sessions.create_session(user + 1, "user").token)
                    .collect::<Vec<_>>()
            }));
        }

        let mut tokens = HashSet::new();
        for handle in handles {
            for token in handle.join().unwrap() {
                assert!(tokens.insert(token), "duplicate token issued");
            }
        }
        assert_eq!(tokens.len(), 256);
        assert_eq!(sessions.session_count(), 256);
    }
}

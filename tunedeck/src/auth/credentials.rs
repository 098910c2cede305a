//! Credential shape validation and password verification.

use std::sync::Arc;

use sha3::{Digest, Sha3_512};
use tracing::{debug, warn};

use crate::errors::{CredentialFailure, Error};
use crate::store::{CredentialStore, StoreError};
use crate::types::UserId;

const MIN_USERNAME_LENGTH: usize = 3;
const MAX_USERNAME_LENGTH: usize = 35;
const MIN_PASSWORD_LENGTH: usize = 3;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Verifies a username/password pair against stored credentials.
///
/// Stored hashes are SHA3-512 hex digests of the plaintext password; the
/// database never sees a plaintext password. Every rejection comes back as
/// [`Error::InvalidCredentials`]; only the internal cause tag (and the log
/// line written here) distinguishes bad input from an unknown account, a
/// wrong password, or a storage failure.
pub struct CredentialValidator {
    credentials: Arc<dyn CredentialStore>,
}

impl CredentialValidator {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }

    /// Verify a login attempt and return the account's user ID.
    ///
    /// Input outside the accepted length bounds is rejected before any
    /// storage lookup. Idempotent; no side effects on any outcome.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserId, Error> {
        if !input_accepted(username, password) {
            debug!(username, "login rejected: input outside accepted bounds");
            return Err(Error::InvalidCredentials {
                cause: CredentialFailure::RejectedInput,
            });
        }

        let credential = match self.credentials.credential(username).await {
            Ok(credential) => credential,
            Err(StoreError::NotFound) => {
                debug!(username, "login rejected: unknown account");
                return Err(Error::InvalidCredentials {
                    cause: CredentialFailure::UnknownAccount,
                });
            }
            Err(err) => {
                warn!(username, error = %err, "credential lookup failed");
                return Err(Error::InvalidCredentials {
                    cause: CredentialFailure::Storage,
                });
            }
        };

        // Exact string equality on the fixed-length hex digests, never
        // pattern matching.
        if sha3_512_hex(password) == credential.password_hash {
            Ok(credential.user_id)
        } else {
            debug!(username, "login rejected: password mismatch");
            Err(Error::InvalidCredentials {
                cause: CredentialFailure::WrongPassword,
            })
        }
    }
}

/// Length bounds on the raw input, counted in characters.
fn input_accepted(username: &str, password: &str) -> bool {
    let username_length = username.chars().count();
    let password_length = password.chars().count();

    (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username_length)
        && (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&password_length)
}

/// SHA3-512 digest of the input, rendered as lowercase hex. This is the
/// stored-hash format.
pub fn sha3_512_hex(input: &str) -> String {
    hex::encode(Sha3_512::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::store::Credential;

    /// Counts lookups so tests can assert that malformed input never reaches
    /// storage.
    struct CountingStore {
        lookups: AtomicUsize,
        credential: Option<Credential>,
        fail: bool,
    }

    impl CountingStore {
        fn with_account(user_id: UserId, password: &str) -> Self {
            Self {
                lookups: AtomicUsize::new(0),
                credential: Some(Credential {
                    user_id,
                    password_hash: sha3_512_hex(password),
                }),
                fail: false,
            }
        }

        fn empty() -> Self {
            Self {
                lookups: AtomicUsize::new(0),
                credential: None,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                lookups: AtomicUsize::new(0),
                credential: None,
                fail: true,
            }
        }
    }

    #[async_trait]
    impl CredentialStore for CountingStore {
        async fn credential(&self, _username: &str) -> crate::store::Result<Credential> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StoreError::Other(anyhow::anyhow!("storage unavailable")));
            }
            self.credential.clone().ok_or(StoreError::NotFound)
        }
    }

    fn cause_of(err: Error) -> CredentialFailure {
        match err {
            Error::InvalidCredentials { cause } => cause,
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn out_of_bounds_input_rejected_without_lookup() {
        let store = Arc::new(CountingStore::with_account(123, "verysecure"));
        let validator = CredentialValidator::new(store.clone());

        let long_username = "x".repeat(36);
        let long_password = "x".repeat(129);
        let cases: [(&str, &str); 4] = [
            ("ab", "verysecure"),                    // username too short
            (long_username.as_str(), "verysecure"),  // username too long
            ("mark", "ab"),                          // password too short
            ("mark", long_password.as_str()),        // password too long
        ];
        for (username, password) in cases {
            let err = validator.authenticate(username, password).await.unwrap_err();
            assert_eq!(cause_of(err), CredentialFailure::RejectedInput);
        }
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn boundary_lengths_are_accepted() {
        let store = Arc::new(CountingStore::with_account(123, "abc"));
        let validator = CredentialValidator::new(store);

        // 3-char username and 3-char password sit exactly on the lower bound
        assert_eq!(validator.authenticate("abc", "abc").await.unwrap(), 123);
    }

    #[tokio::test]
    async fn unknown_account_rejected() {
        let validator = CredentialValidator::new(Arc::new(CountingStore::empty()));
        let err = validator.authenticate("mark", "verysecure").await.unwrap_err();
        assert_eq!(cause_of(err), CredentialFailure::UnknownAccount);
    }

    #[tokio::test]
    async fn storage_failure_rejected_as_invalid_credentials() {
        let validator = CredentialValidator::new(Arc::new(CountingStore::failing()));
        let err = validator.authenticate("mark", "verysecure").await.unwrap_err();
        assert_eq!(cause_of(err), CredentialFailure::Storage);
    }

    #[tokio::test]
    async fn correct_password_returns_user_id() {
        let validator = CredentialValidator::new(Arc::new(CountingStore::with_account(123, "verysecure")));
        assert_eq!(validator.authenticate("mark", "verysecure").await.unwrap(), 123);
    }

    #[tokio::test]
    async fn wrong_password_rejected() {
        let validator = CredentialValidator::new(Arc::new(CountingStore::with_account(123, "verysecure")));
        let err = validator.authenticate("mark", "wrongpassword").await.unwrap_err();
        assert_eq!(cause_of(err), CredentialFailure::WrongPassword);
    }

    #[test]
    fn digest_is_hex_of_fixed_width() {
        let digest = sha3_512_hex("verysecure");
        // SHA3-512 produces 64 bytes, 128 hex characters
        assert_eq!(digest.len(), 128);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(digest, sha3_512_hex("verysecurE"));
    }
}

use crate::store::StoreError;
use crate::types::PlaylistId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

/// Root cause of a rejected login attempt.
///
/// Clients always receive the same `InvalidCredentials` answer regardless of
/// the cause (distinct answers would let callers enumerate usernames). The
/// cause is kept on the error for logs and tests only; it never reaches the
/// response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    /// Username or password length outside the accepted bounds. Rejected
    /// before any storage lookup.
    RejectedInput,
    /// No account with that username.
    UnknownAccount,
    /// Account exists but the password digest did not match.
    WrongPassword,
    /// The credential lookup itself failed.
    Storage,
}

#[derive(ThisError, Debug)]
pub enum Error {
    /// Login rejected. One externally-visible kind for every cause.
    #[error("invalid credentials ({cause:?})")]
    InvalidCredentials { cause: CredentialFailure },

    /// Token does not belong to any active session.
    #[error("unknown session token")]
    UnknownToken,

    /// Valid identity, but not the owner of the playlist it tried to mutate.
    #[error("caller does not own playlist {playlist}")]
    Unauthorized { playlist: PlaylistId },

    /// Storage collaborator error
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Client contract: rejected logins answer 409, an
            // unresolvable token answers 404, and a failed ownership check
            // answers a bare 401.
            Error::InvalidCredentials { .. } => StatusCode::CONFLICT,
            Error::UnknownToken => StatusCode::NOT_FOUND,
            Error::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Error::Store(store_err) => match store_err {
                StoreError::NotFound => StatusCode::NOT_FOUND,
                StoreError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            // Same wording for bad input, unknown account and wrong password.
            // Storage trouble gets a distinct message but the same kind and
            // status, so callers still cannot tell the causes apart.
            Error::InvalidCredentials {
                cause: CredentialFailure::Storage,
            } => "Internal Server Error.".to_string(),
            Error::InvalidCredentials { .. } => "Username or password is incorrect.".to_string(),
            Error::UnknownToken => "User not found.".to_string(),
            Error::Unauthorized { .. } => String::new(),
            Error::Store(StoreError::NotFound) => "Resource not found".to_string(),
            Error::Store(StoreError::Other(_)) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Store(StoreError::Other(_)) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::InvalidCredentials { .. } | Error::UnknownToken | Error::Unauthorized { .. } => {
                tracing::info!("Authorization error: {}", self);
            }
            Error::Store(StoreError::NotFound) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match &self {
            // Unauthorized answers with an empty body.
            Error::Unauthorized { .. } => status.into_response(),
            _ => (status, self.user_message()).into_response(),
        }
    }
}

//! Login payloads and the shared token query parameter.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Login request body. Unverified client input.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Username of the account to log in to.
    pub user: String,
    /// Plaintext password; hashed before any comparison.
    pub password: String,
}

/// Successful login: the bearer token and the username it belongs to.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
}

/// Bearer token carried as a query parameter by every authenticated route.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TokenQuery {
    /// Session token obtained from `POST /login`.
    pub token: String,
}

use axum::{Json, extract::State};

use crate::{
    AppState,
    api::models::auth::{LoginRequest, LoginResponse},
    errors::Error,
};

/// Login with username and password
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "authentication",
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 409, description = "Invalid credentials"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, Error> {
    let user_id = state.credentials.authenticate(&request.user, &request.password).await?;

    let session = state.sessions.create_session(user_id, &request.user);
    tracing::info!(user_id, "login succeeded");

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.username,
    }))
}

//! Auth handlers: register, login, me, password change.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use chatgate_entity::account::Role;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::dto::response::{AccountResponse, ApiResponse, MeResponse, SessionResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SessionResponse>>)> {
    let session = state
        .accounts
        .register(&req.email, &req.password, Role::User)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(SessionResponse::from(session))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<SessionResponse>>> {
    let session = state.accounts.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(SessionResponse::from(session))))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<MeResponse>>> {
    let account = state.accounts.me(&auth).await?;
    Ok(Json(ApiResponse::ok(MeResponse {
        account: account.into(),
    })))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    let account = state
        .accounts
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(account.into())))
}

//! Admin account handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::SetRoleRequest;
use crate::dto::response::{AccountResponse, ApiResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AdminUser, ApiJson};
use crate::state::AppState;

/// GET /api/admin/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    admin: AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<AccountResponse>>>> {
    let accounts = state.admin.list_accounts(&admin).await?;
    Ok(Json(ApiResponse::ok(
        accounts.into_iter().map(AccountResponse::from).collect(),
    )))
}

/// GET /api/admin/accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    let id = parse_uuid(&id)?;
    let account = state.admin.get_account(&admin, id).await?;
    Ok(Json(ApiResponse::ok(account.into())))
}

/// PUT /api/admin/accounts/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SetRoleRequest>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    let id = parse_uuid(&id)?;
    let account = state.admin.set_role(&admin, id, req.is_admin).await?;
    Ok(Json(ApiResponse::ok(account.into())))
}

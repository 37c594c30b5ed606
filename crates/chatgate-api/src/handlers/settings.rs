//! Settings handlers.

use axum::Json;
use axum::extract::State;

use chatgate_entity::account::SettingsPatch;
use chatgate_service::SettingsView;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, AuthUser};
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<SettingsView>>> {
    let view = state.settings.get(&auth).await?;
    Ok(Json(ApiResponse::ok(view)))
}

/// PUT /api/settings
///
/// Partial update: fields left out of the body keep their stored values.
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(patch): ApiJson<SettingsPatch>,
) -> ApiResult<Json<ApiResponse<SettingsView>>> {
    let view = state.settings.update(&auth, patch).await?;
    Ok(Json(ApiResponse::ok(view)))
}

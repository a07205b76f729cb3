use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminAuth;
use crate::models::suggestions::{self, BadgeSuggestion};
use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct MigrateResponse {
    pub success: bool,
}

#[utoipa::path(
    post,
    path = "/api/admin/migrate",
    tag = "Admin",
    operation_id = "migrate",
    summary = "Synchronize the database schema with the entity definitions",
    responses(
        (status = 200, description = "Schema synchronized", body = MigrateResponse),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
        (status = 500, description = "Sync failed", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn migrate(
    _auth: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<MigrateResponse>, AppError> {
    crate::database::sync_schema(&state.db).await?;
    Ok(Json(MigrateResponse { success: true }))
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct SuggestionsQuery {
    /// Restrict the catalog to one category.
    pub category: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SuggestionsResponse {
    pub data: Vec<BadgeSuggestion>,
    pub categories: Vec<&'static str>,
}

#[utoipa::path(
    get,
    path = "/api/admin/suggestions",
    tag = "Admin",
    operation_id = "suggestions",
    summary = "Curated badge ideas for the create flow",
    params(SuggestionsQuery),
    responses(
        (status = 200, description = "Suggestion catalog", body = SuggestionsResponse),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
    ),
)]
#[instrument(skip(query))]
pub async fn list_suggestions(
    _auth: AdminAuth,
    Query(query): Query<SuggestionsQuery>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        data: suggestions::by_category(query.category.as_deref()),
        categories: suggestions::CATEGORIES.to_vec(),
    })
}

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, SqlErr, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use crate::entity::{award, badge, person, project};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminAuth;
use crate::extractors::json::AppJson;
use crate::models::award::{
    AwardDetails, AwardListItem, AwardListResponse, PublishAwardRequest, PublishAwardResponse,
    validate_publish_award,
};
use crate::state::AppState;
use crate::utils::slug::generate_permalink;

#[utoipa::path(
    post,
    path = "/api/admin/publish-award",
    tag = "Awards",
    operation_id = "publish_award",
    summary = "Create the person, project, and award rows and mint a permalink",
    request_body = PublishAwardRequest,
    responses(
        (status = 201, description = "Award published", body = PublishAwardResponse),
        (status = 400, description = "VALIDATION_ERROR", body = ErrorBody),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
        (status = 404, description = "Badge not found", body = ErrorBody),
        (status = 409, description = "Permalink collision (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(badge_id = %payload.badge_id))]
pub async fn publish_award(
    _auth: AdminAuth,
    State(state): State<AppState>,
    AppJson(payload): AppJson<PublishAwardRequest>,
) -> Result<(StatusCode, Json<PublishAwardResponse>), AppError> {
    validate_publish_award(&payload)?;

    badge::Entity::find_by_id(payload.badge_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Badge '{}' not found", payload.badge_id)))?;

    let now = chrono::Utc::now();
    let permalink = generate_permalink();

    // All three rows commit or none do; a failed insert must not leave an
    // orphaned person or project behind.
    let txn = state.db.begin().await?;

    let new_person = person::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.person.name.trim().to_string()),
        handle: Set(payload.person.handle),
        title: Set(payload.person.title),
        avatar_url: Set(payload.person.avatar_url),
        created_at: Set(now),
    };
    let new_project = project::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.project.name.trim().to_string()),
        short_desc: Set(payload.project.short_desc.trim().to_string()),
        created_at: Set(now),
    };

    let (person_row, project_row) =
        tokio::join!(new_person.insert(&txn), new_project.insert(&txn));
    let person_row = person_row?;
    let project_row = project_row?;

    let new_award = award::ActiveModel {
        id: Set(Uuid::new_v4()),
        badge_id: Set(payload.badge_id),
        person_id: Set(person_row.id),
        project_id: Set(project_row.id),
        citation: Set(payload.citation.trim().to_string()),
        public_permalink: Set(permalink.clone()),
        created_at: Set(now),
    };

    let award_row = new_award.insert(&txn).await.map_err(|err| {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            AppError::Conflict("Permalink collision, retry the publish".into())
        } else {
            AppError::from(err)
        }
    })?;

    txn.commit().await?;

    let share_url = format!(
        "{}/a/{permalink}",
        state.config.server.public_base_url.trim_end_matches('/')
    );

    Ok((
        StatusCode::CREATED,
        Json(PublishAwardResponse {
            award: award_row.into(),
            permalink,
            share_url,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/awards/{id}",
    tag = "Awards",
    operation_id = "delete_award",
    summary = "Delete an award, leaving its badge, person, and project in place",
    params(("id" = Uuid, Path, description = "Award id")),
    responses(
        (status = 204, description = "Award deleted"),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
        (status = 404, description = "No such award", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_award(
    _auth: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = award::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Award '{id}' not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/awards",
    tag = "Awards",
    operation_id = "list_awards",
    summary = "List all awards, newest first",
    responses(
        (status = 200, description = "Award list", body = AwardListResponse),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_awards(
    _auth: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<AwardListResponse>, AppError> {
    let data = list_award_items(&state.db).await?;
    Ok(Json(AwardListResponse { data }))
}

#[utoipa::path(
    get,
    path = "/api/awards/{permalink}",
    tag = "Awards",
    operation_id = "get_award",
    summary = "Fetch one published award with its badge, person, and project",
    params(("permalink" = String, Path, description = "Public permalink token")),
    responses(
        (status = 200, description = "Award details", body = AwardDetails),
        (status = 404, description = "No such award", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_award(
    State(state): State<AppState>,
    Path(permalink): Path<String>,
) -> Result<Json<AwardDetails>, AppError> {
    let details = find_award_details(&state.db, &permalink).await?;
    Ok(Json(details))
}

/// Load one award by permalink together with the rows it references.
pub(crate) async fn find_award_details(
    db: &DatabaseConnection,
    permalink: &str,
) -> Result<AwardDetails, AppError> {
    let award_row = award::Entity::find()
        .filter(award::Column::PublicPermalink.eq(permalink))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Award '{permalink}' not found")))?;

    let badge_row = badge::Entity::find_by_id(award_row.badge_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Internal("Award references a missing badge".into()))?;
    let person_row = person::Entity::find_by_id(award_row.person_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Internal("Award references a missing person".into()))?;
    let project_row = project::Entity::find_by_id(award_row.project_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Internal("Award references a missing project".into()))?;

    Ok(AwardDetails {
        id: award_row.id,
        citation: award_row.citation,
        public_permalink: award_row.public_permalink,
        created_at: award_row.created_at,
        badge_id: badge_row.id,
        badge_name: badge_row.name,
        badge_slug: badge_row.slug,
        style_key: badge_row.style_key,
        image_blob_url: badge_row.image_blob_url,
        thumb_blob_url: badge_row.thumb_blob_url,
        person_name: person_row.name,
        person_handle: person_row.handle,
        person_title: person_row.title,
        person_avatar: person_row.avatar_url,
        project_name: project_row.name,
        project_desc: project_row.short_desc,
    })
}

/// Load every award as a compact listing row, newest first. The referenced
/// rows are fetched in three id-set queries and joined in memory.
pub(crate) async fn list_award_items(
    db: &DatabaseConnection,
) -> Result<Vec<AwardListItem>, AppError> {
    let awards = award::Entity::find()
        .order_by_desc(award::Column::CreatedAt)
        .all(db)
        .await?;

    let badge_ids: Vec<Uuid> = awards.iter().map(|a| a.badge_id).collect();
    let person_ids: Vec<Uuid> = awards.iter().map(|a| a.person_id).collect();
    let project_ids: Vec<Uuid> = awards.iter().map(|a| a.project_id).collect();

    let badges: HashMap<Uuid, badge::Model> = badge::Entity::find()
        .filter(badge::Column::Id.is_in(badge_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.id, b))
        .collect();
    let persons: HashMap<Uuid, person::Model> = person::Entity::find()
        .filter(person::Column::Id.is_in(person_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let projects: HashMap<Uuid, project::Model> = project::Entity::find()
        .filter(project::Column::Id.is_in(project_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let items = awards
        .into_iter()
        .filter_map(|a| {
            let badge = badges.get(&a.badge_id)?;
            let person = persons.get(&a.person_id)?;
            let project = projects.get(&a.project_id)?;
            Some(AwardListItem {
                id: a.id,
                citation: a.citation,
                public_permalink: a.public_permalink,
                created_at: a.created_at,
                badge_name: badge.name.clone(),
                thumb_blob_url: badge.thumb_blob_url.clone(),
                style_key: badge.style_key.clone(),
                person_name: person.name.clone(),
                person_handle: person.handle.clone(),
                project_name: project.name.clone(),
            })
        })
        .collect();

    Ok(items)
}

use axum::{Json, extract::State, http::StatusCode};
use rand::Rng;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, SqlErr};
use tracing::instrument;
use uuid::Uuid;

use crate::entity::badge;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminAuth;
use crate::extractors::json::AppJson;
use crate::models::badge::{
    BriefMetadata, GenerateImageRequest, GenerateImageResponse, PreviewBriefRequest,
    PreviewBriefResponse, validate_generate_image, validate_preview_brief,
};
use crate::providers::{prompt, templates};
use crate::state::AppState;
use crate::utils::image::process_and_store;
use crate::utils::slug::generate_slug;

#[utoipa::path(
    post,
    path = "/api/admin/preview-brief",
    tag = "Badges",
    operation_id = "preview_brief",
    summary = "Generate a visual brief for a badge without persisting anything",
    request_body = PreviewBriefRequest,
    responses(
        (status = 200, description = "Generated brief", body = PreviewBriefResponse),
        (status = 400, description = "VALIDATION_ERROR", body = ErrorBody),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
        (status = 502, description = "UPSTREAM_ERROR", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn preview_brief(
    _auth: AdminAuth,
    State(state): State<AppState>,
    AppJson(payload): AppJson<PreviewBriefRequest>,
) -> Result<Json<PreviewBriefResponse>, AppError> {
    validate_preview_brief(&payload)?;

    let mut description = payload.description.trim().to_string();
    let guide = templates::combine_style_guide(
        payload.style_template.as_deref(),
        payload.reference_style.as_deref(),
    );
    if !guide.is_empty() {
        description.push_str("\n\nStyle Guide:\n");
        description.push_str(&guide);
    }

    let brief = prompt::generate_brief(
        state.text.as_ref(),
        payload.name.trim(),
        &description,
        payload.style,
    )
    .await?;

    Ok(Json(PreviewBriefResponse {
        brief,
        metadata: BriefMetadata {
            style_template: payload.style_template,
            reference_style: payload.reference_style,
            quality: payload.quality.unwrap_or_default(),
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/generate-image",
    tag = "Badges",
    operation_id = "generate_image",
    summary = "Render the previewed brief into stored assets and create the badge",
    request_body = GenerateImageRequest,
    responses(
        (status = 201, description = "Badge created", body = GenerateImageResponse),
        (status = 400, description = "VALIDATION_ERROR", body = ErrorBody),
        (status = 401, description = "TOKEN_MISSING / TOKEN_INVALID", body = ErrorBody),
        (status = 409, description = "Slug collision (CONFLICT)", body = ErrorBody),
        (status = 502, description = "UPSTREAM_ERROR", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn generate_image(
    _auth: AdminAuth,
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateImageRequest>,
) -> Result<(StatusCode, Json<GenerateImageResponse>), AppError> {
    validate_generate_image(&payload)?;

    let quality = payload.quality.unwrap_or_default();
    let actual_prompt = prompt::image_prompt(
        &payload.brief,
        payload.style,
        payload.reference_style.as_deref(),
    );

    let remote_url = state.image.generate(&actual_prompt, quality).await?;

    let slug = generate_slug(payload.name.trim());
    let assets = process_and_store(&state.http, state.storage.as_ref(), &remote_url, &slug).await?;

    // Cosmetic seed; the image provider does not accept one.
    let seed: i32 = rand::rng().random_range(0..1_000_000);

    let row = badge::ActiveModel {
        id: Set(Uuid::new_v4()),
        slug: Set(slug),
        name: Set(payload.name.trim().to_string()),
        style_key: Set(payload.style.key().to_string()),
        prompt: Set(payload.brief.image_prompt.clone()),
        actual_prompt: Set(Some(actual_prompt)),
        style_template: Set(payload.style_template),
        reference_style: Set(payload.reference_style),
        quality_setting: Set(quality.key().to_string()),
        model_used: Set(state.image.model_name().to_string()),
        seed: Set(Some(seed)),
        image_blob_url: Set(assets.image_url),
        thumb_blob_url: Set(assets.thumb_url),
        created_by: Set(payload.created_by),
        created_at: Set(chrono::Utc::now()),
    };

    let model = row.insert(&state.db).await.map_err(|err| {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            AppError::Conflict("A badge with this slug already exists".into())
        } else {
            AppError::from(err)
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(GenerateImageResponse {
            badge: model.into(),
        }),
    ))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::brief::{BadgeBrief, BadgeStyle, Quality};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct PreviewBriefRequest {
    pub name: String,
    pub description: String,
    pub style: BadgeStyle,
    /// Optional style template id, e.g. "gaming-achievement".
    pub style_template: Option<String>,
    /// Free-text style reference appended to the style guide.
    pub reference_style: Option<String>,
    pub quality: Option<Quality>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BriefMetadata {
    pub style_template: Option<String>,
    pub reference_style: Option<String>,
    pub quality: Quality,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PreviewBriefResponse {
    #[serde(flatten)]
    pub brief: BadgeBrief,
    pub metadata: BriefMetadata,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct GenerateImageRequest {
    pub name: String,
    pub style: BadgeStyle,
    /// The previewed brief, echoed back by the admin client.
    pub brief: BadgeBrief,
    pub style_template: Option<String>,
    pub reference_style: Option<String>,
    pub quality: Option<Quality>,
    #[serde(default = "default_created_by")]
    pub created_by: String,
}

fn default_created_by() -> String {
    "admin".to_string()
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BadgeResponse {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub style_key: String,
    pub prompt: String,
    /// The exact prompt sent to the image model, kept for audit display.
    pub actual_prompt: Option<String>,
    pub style_template: Option<String>,
    pub reference_style: Option<String>,
    pub quality_setting: String,
    pub model_used: String,
    pub seed: Option<i32>,
    pub image_blob_url: String,
    pub thumb_blob_url: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct GenerateImageResponse {
    pub badge: BadgeResponse,
}

impl From<crate::entity::badge::Model> for BadgeResponse {
    fn from(m: crate::entity::badge::Model) -> Self {
        Self {
            id: m.id,
            slug: m.slug,
            name: m.name,
            style_key: m.style_key,
            prompt: m.prompt,
            actual_prompt: m.actual_prompt,
            style_template: m.style_template,
            reference_style: m.reference_style,
            quality_setting: m.quality_setting,
            model_used: m.model_used,
            seed: m.seed,
            image_blob_url: m.image_blob_url,
            thumb_blob_url: m.thumb_blob_url,
            created_by: m.created_by,
            created_at: m.created_at,
        }
    }
}

/// Validate a badge name (1-100 characters, trimmed).
pub fn validate_name(name: &str) -> Result<(), AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 100 {
        return Err(AppError::Validation("Name must be 1-100 characters".into()));
    }
    Ok(())
}

pub fn validate_preview_brief(req: &PreviewBriefRequest) -> Result<(), AppError> {
    validate_name(&req.name)?;
    let description = req.description.trim();
    if description.is_empty() || description.chars().count() > 500 {
        return Err(AppError::Validation(
            "Description must be 1-500 characters".into(),
        ));
    }
    Ok(())
}

pub fn validate_generate_image(req: &GenerateImageRequest) -> Result<(), AppError> {
    validate_name(&req.name)?;
    req.brief.validate()?;
    if req.created_by.trim().is_empty() || req.created_by.chars().count() > 100 {
        return Err(AppError::Validation(
            "created_by must be 1-100 characters".into(),
        ));
    }
    Ok(())
}

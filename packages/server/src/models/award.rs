use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct PersonFields {
    pub name: String,
    pub handle: Option<String>,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ProjectFields {
    pub name: String,
    pub short_desc: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct PublishAwardRequest {
    pub badge_id: Uuid,
    pub person: PersonFields,
    pub project: ProjectFields,
    pub citation: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AwardResponse {
    pub id: Uuid,
    pub badge_id: Uuid,
    pub person_id: Uuid,
    pub project_id: Uuid,
    pub citation: String,
    pub public_permalink: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PublishAwardResponse {
    pub award: AwardResponse,
    pub permalink: String,
    pub share_url: String,
}

/// An award joined with the badge, person, and project it references.
/// Drives the public pages and the social preview image.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AwardDetails {
    pub id: Uuid,
    pub citation: String,
    pub public_permalink: String,
    pub created_at: DateTime<Utc>,

    pub badge_id: Uuid,
    pub badge_name: String,
    pub badge_slug: String,
    pub style_key: String,
    pub image_blob_url: String,
    pub thumb_blob_url: String,

    pub person_name: String,
    pub person_handle: Option<String>,
    pub person_title: Option<String>,
    pub person_avatar: Option<String>,

    pub project_name: String,
    pub project_desc: String,
}

/// Compact row for the hall-of-fame and admin listings.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AwardListItem {
    pub id: Uuid,
    pub citation: String,
    pub public_permalink: String,
    pub created_at: DateTime<Utc>,
    pub badge_name: String,
    pub thumb_blob_url: String,
    pub style_key: String,
    pub person_name: String,
    pub person_handle: Option<String>,
    pub project_name: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AwardListResponse {
    pub data: Vec<AwardListItem>,
}

impl From<crate::entity::award::Model> for AwardResponse {
    fn from(m: crate::entity::award::Model) -> Self {
        Self {
            id: m.id,
            badge_id: m.badge_id,
            person_id: m.person_id,
            project_id: m.project_id,
            citation: m.citation,
            public_permalink: m.public_permalink,
            created_at: m.created_at,
        }
    }
}

pub fn validate_publish_award(req: &PublishAwardRequest) -> Result<(), AppError> {
    let citation = req.citation.trim();
    if citation.is_empty() || citation.chars().count() > 500 {
        return Err(AppError::Validation(
            "Citation must be 1-500 characters".into(),
        ));
    }
    if req.person.name.trim().is_empty() {
        return Err(AppError::Validation("Person name must not be empty".into()));
    }
    if req.project.name.trim().is_empty() {
        return Err(AppError::Validation("Project name must not be empty".into()));
    }
    if req.project.short_desc.trim().is_empty() {
        return Err(AppError::Validation(
            "Project description must not be empty".into(),
        ));
    }
    Ok(())
}

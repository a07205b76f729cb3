use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "badge")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// URL-safe identifier derived from the badge name plus a base36
    /// timestamp suffix. Also the storage prefix for the rendered assets.
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub style_key: String,

    /// The image prompt from the brief, as previewed by the admin.
    #[sea_orm(column_type = "Text")]
    pub prompt: String,
    /// The assembled prompt actually sent to the image model.
    #[sea_orm(column_type = "Text", nullable)]
    pub actual_prompt: Option<String>,
    pub style_template: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub reference_style: Option<String>,
    pub quality_setting: String,

    pub model_used: String,
    /// Cosmetic only; the image provider offers no seed control.
    pub seed: Option<i32>,

    #[sea_orm(column_type = "Text")]
    pub image_blob_url: String,
    #[sea_orm(column_type = "Text")]
    pub thumb_blob_url: String,

    pub created_by: String,

    #[sea_orm(has_many)]
    pub awards: HasMany<super::award::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

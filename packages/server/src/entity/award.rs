use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The binding of one badge to one person and one project, published under a
/// unique permalink. The only entity with a delete operation; the referenced
/// rows stay behind.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "award")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub badge_id: Uuid,
    #[sea_orm(belongs_to, from = "badge_id", to = "id")]
    pub badge: HasOne<super::badge::Entity>,

    pub person_id: Uuid,
    #[sea_orm(belongs_to, from = "person_id", to = "id")]
    pub person: HasOne<super::person::Entity>,

    pub project_id: Uuid,
    #[sea_orm(belongs_to, from = "project_id", to = "id")]
    pub project: HasOne<super::project::Entity>,

    #[sea_orm(column_type = "Text")]
    pub citation: String,

    /// 8-character lowercase alphanumeric token for the public page.
    #[sea_orm(unique)]
    pub public_permalink: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

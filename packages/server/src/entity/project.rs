use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Projects an award is given for. Immutable, never deduplicated.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub short_desc: String,

    #[sea_orm(has_many)]
    pub awards: HasMany<super::award::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Teacher;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// External reference code (UUID v4), immutable after insert
    #[sea_orm(unique)]
    pub uuid: String,
    pub firstname: String,
    pub lastname: String,
    /// Tax identifier, unique across all teachers
    #[sea_orm(unique)]
    pub vat: String,
    pub region_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id"
    )]
    Region,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Teacher {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            uuid: model.uuid,
            firstname: model.firstname,
            lastname: model.lastname,
            vat: model.vat,
            region_id: model.region_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

//! SeaORM implementation of RegionRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{DomainError, Region, RegionRepository, Teacher};
use crate::models::region::{Column, Entity as RegionEntity};
use crate::models::teacher::{self, Entity as TeacherEntity};

/// SeaORM-based implementation of RegionRepository.
///
/// Generic over the connection so the same repository runs against a pooled
/// `DatabaseConnection` or inside a `DatabaseTransaction`.
pub struct SeaOrmRegionRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmRegionRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'a, C> RegionRepository for SeaOrmRegionRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<Region>, DomainError> {
        let region = RegionEntity::find_by_id(id).one(self.conn).await?;
        Ok(region.map(Region::from))
    }

    async fn find_all_sorted(&self) -> Result<Vec<Region>, DomainError> {
        let regions = RegionEntity::find()
            .order_by_asc(Column::Name)
            .all(self.conn)
            .await?;

        Ok(regions.into_iter().map(Region::from).collect())
    }

    async fn members(&self, region_id: i32) -> Result<Vec<Teacher>, DomainError> {
        let teachers = TeacherEntity::find()
            .filter(teacher::Column::RegionId.eq(region_id))
            .order_by_asc(teacher::Column::Id)
            .all(self.conn)
            .await?;

        Ok(teachers.into_iter().map(Teacher::from).collect())
    }
}

//! SeaORM implementation of TeacherRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::{DomainError, NewTeacher, PaginatedTeachers, Teacher, TeacherRepository};
use crate::models::teacher::{ActiveModel, Column, Entity as TeacherEntity};

/// SeaORM-based implementation of TeacherRepository
pub struct SeaOrmTeacherRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmTeacherRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'a, C> TeacherRepository for SeaOrmTeacherRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_vat(&self, vat: &str) -> Result<Option<Teacher>, DomainError> {
        let teacher = TeacherEntity::find()
            .filter(Column::Vat.eq(vat))
            .one(self.conn)
            .await?;

        Ok(teacher.map(Teacher::from))
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Teacher>, DomainError> {
        let teacher = TeacherEntity::find()
            .filter(Column::Uuid.eq(uuid))
            .one(self.conn)
            .await?;

        Ok(teacher.map(Teacher::from))
    }

    async fn find_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedTeachers, DomainError> {
        if page_size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }

        let total = TeacherEntity::find().count(self.conn).await?;

        // Offsets past the end (or past u64) yield an empty page without a query
        let offset = match page_index.checked_mul(page_size) {
            Some(offset) if offset < total => offset,
            _ => {
                return Ok(PaginatedTeachers {
                    teachers: Vec::new(),
                    total,
                });
            }
        };

        // offset < total, so both bounds fit the i64 SQLite binds as
        let teachers = TeacherEntity::find()
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(page_size.min(total - offset))
            .all(self.conn)
            .await?;

        Ok(PaginatedTeachers {
            teachers: teachers.into_iter().map(Teacher::from).collect(),
            total,
        })
    }

    async fn create(&self, teacher: NewTeacher) -> Result<Teacher, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let new_teacher = ActiveModel {
            uuid: Set(Uuid::new_v4().to_string()),
            firstname: Set(teacher.firstname),
            lastname: Set(teacher.lastname),
            vat: Set(teacher.vat),
            region_id: Set(teacher.region_id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = new_teacher.insert(self.conn).await?;
        Ok(Teacher::from(saved))
    }

    async fn update(&self, teacher: Teacher) -> Result<Teacher, DomainError> {
        // uuid and created_at stay Unchanged so they are never written back
        let active = ActiveModel {
            id: Unchanged(teacher.id),
            uuid: Unchanged(teacher.uuid),
            firstname: Set(teacher.firstname),
            lastname: Set(teacher.lastname),
            vat: Set(teacher.vat),
            region_id: Set(teacher.region_id),
            created_at: Unchanged(teacher.created_at),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
        };

        let updated = active.update(self.conn).await?;
        Ok(Teacher::from(updated))
    }

    async fn delete(&self, teacher: &Teacher) -> Result<(), DomainError> {
        let result = TeacherEntity::delete_by_id(teacher.id)
            .exec(self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Teacher {} not found",
                teacher.uuid
            )));
        }

        Ok(())
    }
}

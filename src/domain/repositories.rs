//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Region reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i32,
    pub name: String,
}

/// A persisted teacher.
///
/// The owning region is stored as `region_id`; a region's membership set is
/// derived from it by [`RegionRepository::members`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i32,
    /// External reference code, assigned on insert and never changed
    pub uuid: String,
    pub firstname: String,
    pub lastname: String,
    pub vat: String,
    pub region_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields for a teacher that has not been stored yet
#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub firstname: String,
    pub lastname: String,
    pub vat: String,
    pub region_id: i32,
}

/// One page of teachers with the total row count
#[derive(Debug)]
pub struct PaginatedTeachers {
    pub teachers: Vec<Teacher>,
    pub total: u64,
}

/// Repository trait for Region entity
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Find a region by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Region>, DomainError>;

    /// Find all regions ordered by name
    async fn find_all_sorted(&self) -> Result<Vec<Region>, DomainError>;

    /// Teachers currently owned by the region, ordered by ID
    async fn members(&self, region_id: i32) -> Result<Vec<Teacher>, DomainError>;
}

/// Repository trait for Teacher entity
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Find a teacher by tax identifier
    async fn find_by_vat(&self, vat: &str) -> Result<Option<Teacher>, DomainError>;

    /// Find a teacher by external reference code
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<Teacher>, DomainError>;

    /// Fetch one zero-based page ordered by ID. `page_size` must be at least 1.
    async fn find_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedTeachers, DomainError>;

    /// Insert a teacher, assigning ID, reference code and timestamps
    async fn create(&self, teacher: NewTeacher) -> Result<Teacher, DomainError>;

    /// Persist the mutable fields of an existing teacher and refresh `updated_at`
    async fn update(&self, teacher: Teacher) -> Result<Teacher, DomainError>;

    /// Remove a teacher
    async fn delete(&self, teacher: &Teacher) -> Result<(), DomainError>;
}

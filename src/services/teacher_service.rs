//! Teacher Service - Pure business logic without HTTP layer
//!
//! Enforces the registry invariants: tax identifiers are unique, every teacher
//! belongs to exactly one existing region, and each mutating call either
//! commits completely or leaves nothing behind.

use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::domain::{
    DomainError, NewTeacher, Region, RegionRepository, Teacher, TeacherPage, TeacherRepository,
    TeacherView,
};
use crate::infrastructure::{SeaOrmRegionRepository, SeaOrmTeacherRepository};

use super::observer::{Operation, OperationContext, RegistryObserver, TracingObserver};

/// Input for creating a teacher; field shapes are already validated
#[derive(Debug, Clone)]
pub struct CreateTeacherInput {
    pub firstname: String,
    pub lastname: String,
    pub vat: String,
    pub region_id: i32,
}

/// Input for updating the teacher identified by `uuid`
#[derive(Debug, Clone)]
pub struct UpdateTeacherInput {
    pub uuid: String,
    pub firstname: String,
    pub lastname: String,
    pub vat: String,
    pub region_id: i32,
}

/// Registry service. Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct TeacherService {
    db: DatabaseConnection,
    observer: Arc<dyn RegistryObserver>,
}

impl TeacherService {
    pub fn new(db: DatabaseConnection, observer: Arc<dyn RegistryObserver>) -> Self {
        Self { db, observer }
    }

    /// Service reporting through `tracing`
    pub fn with_tracing(db: DatabaseConnection) -> Self {
        Self::new(db, Arc::new(TracingObserver))
    }

    /// Create a teacher in the requested region
    pub async fn create(&self, input: CreateTeacherInput) -> Result<Teacher, DomainError> {
        let ctx = OperationContext {
            uuid: None,
            vat: Some(input.vat.clone()),
            region_id: Some(input.region_id),
        };

        let result = async move {
            let txn = self.db.begin().await?;
            let teacher = create_teacher(
                &SeaOrmTeacherRepository::new(&txn),
                &SeaOrmRegionRepository::new(&txn),
                input,
            )
            .await?;
            txn.commit().await?;
            Ok::<_, DomainError>(teacher)
        }
        .await;

        self.report(Operation::Create, ctx, result)
    }

    /// One page of teachers in ID order. Out-of-range pages are empty.
    pub async fn list(&self, page_index: u64, page_size: u64) -> Result<TeacherPage, DomainError> {
        let result = async {
            // Page and count must come from the same snapshot
            let txn = self.db.begin().await?;
            let page = list_teachers(
                &SeaOrmTeacherRepository::new(&txn),
                &SeaOrmRegionRepository::new(&txn),
                page_index,
                page_size,
            )
            .await?;
            txn.commit().await?;
            Ok::<_, DomainError>(page)
        }
        .await;

        self.report(Operation::List, OperationContext::default(), result)
    }

    /// Overwrite names, tax id and region of an existing teacher
    pub async fn update(&self, input: UpdateTeacherInput) -> Result<Teacher, DomainError> {
        let ctx = OperationContext {
            uuid: Some(input.uuid.clone()),
            vat: Some(input.vat.clone()),
            region_id: Some(input.region_id),
        };

        let result = async move {
            let txn = self.db.begin().await?;
            let teacher = update_teacher(
                &SeaOrmTeacherRepository::new(&txn),
                &SeaOrmRegionRepository::new(&txn),
                input,
            )
            .await?;
            txn.commit().await?;
            Ok::<_, DomainError>(teacher)
        }
        .await;

        self.report(Operation::Update, ctx, result)
    }

    /// Remove a teacher and, with it, its region membership
    pub async fn delete(&self, uuid: &str) -> Result<(), DomainError> {
        let mut ctx = OperationContext {
            uuid: Some(uuid.to_string()),
            ..Default::default()
        };

        let result = async move {
            let txn = self.db.begin().await?;
            let removed = delete_teacher(&SeaOrmTeacherRepository::new(&txn), uuid).await?;
            txn.commit().await?;
            Ok::<_, DomainError>(removed)
        }
        .await;

        let result = result.map(|removed| {
            ctx.vat = Some(removed.vat);
            ctx.region_id = Some(removed.region_id);
        });
        self.report(Operation::Delete, ctx, result)
    }

    /// Read a single teacher by reference code
    pub async fn get(&self, uuid: &str) -> Result<TeacherView, DomainError> {
        let ctx = OperationContext {
            uuid: Some(uuid.to_string()),
            ..Default::default()
        };

        let result = async {
            let teachers = SeaOrmTeacherRepository::new(&self.db);
            let teacher = teachers
                .find_by_uuid(uuid)
                .await?
                .ok_or_else(|| teacher_not_found(uuid))?;
            self.view_of(teacher).await
        }
        .await;

        self.report(Operation::Get, ctx, result)
    }

    /// Translate an entity into its read model
    pub async fn view_of(&self, teacher: Teacher) -> Result<TeacherView, DomainError> {
        let regions = SeaOrmRegionRepository::new(&self.db);
        let region_name = regions
            .find_by_id(teacher.region_id)
            .await?
            .map(|r| r.name)
            .unwrap_or_default();
        Ok(TeacherView::from_teacher(teacher, region_name))
    }

    /// All regions ordered by name
    pub async fn regions(&self) -> Result<Vec<Region>, DomainError> {
        SeaOrmRegionRepository::new(&self.db).find_all_sorted().await
    }

    /// Membership set of one region
    pub async fn region_members(&self, region_id: i32) -> Result<Vec<TeacherView>, DomainError> {
        let ctx = OperationContext {
            region_id: Some(region_id),
            ..Default::default()
        };

        let result = async {
            let regions = SeaOrmRegionRepository::new(&self.db);
            let region = regions
                .find_by_id(region_id)
                .await?
                .ok_or_else(|| invalid_region(region_id))?;

            let members = regions.members(region.id).await?;
            Ok::<_, DomainError>(
                members
                    .into_iter()
                    .map(|t| TeacherView::from_teacher(t, region.name.clone()))
                    .collect(),
            )
        }
        .await;

        self.report(Operation::RegionMembers, ctx, result)
    }

    fn report<T>(
        &self,
        op: Operation,
        ctx: OperationContext,
        result: Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        match &result {
            Ok(_) => self.observer.on_success(op, &ctx),
            Err(e) => self.observer.on_failure(op, &ctx, e),
        }
        result
    }
}

fn teacher_not_found(uuid: &str) -> DomainError {
    DomainError::NotFound(format!("Teacher {} not found", uuid))
}

fn invalid_region(region_id: i32) -> DomainError {
    DomainError::InvalidReference(format!("Invalid region id {}", region_id))
}

fn vat_taken(vat: &str) -> DomainError {
    DomainError::AlreadyExists(format!("Teacher with vat {} already exists", vat))
}

async fn create_teacher(
    teachers: &dyn TeacherRepository,
    regions: &dyn RegionRepository,
    input: CreateTeacherInput,
) -> Result<Teacher, DomainError> {
    // The UNIQUE(vat) constraint still decides races; this gives the clean error
    if teachers.find_by_vat(&input.vat).await?.is_some() {
        return Err(vat_taken(&input.vat));
    }

    let region = regions
        .find_by_id(input.region_id)
        .await?
        .ok_or_else(|| invalid_region(input.region_id))?;

    teachers
        .create(NewTeacher {
            firstname: input.firstname,
            lastname: input.lastname,
            vat: input.vat,
            region_id: region.id,
        })
        .await
}

async fn list_teachers(
    teachers: &dyn TeacherRepository,
    regions: &dyn RegionRepository,
    page_index: u64,
    page_size: u64,
) -> Result<TeacherPage, DomainError> {
    if page_size == 0 {
        return Err(DomainError::Validation(
            "page size must be at least 1".to_string(),
        ));
    }

    let page = teachers.find_page(page_index, page_size).await?;

    // Regions are small reference data; one lookup serves the whole page
    let region_names: HashMap<i32, String> = if page.teachers.is_empty() {
        HashMap::new()
    } else {
        regions
            .find_all_sorted()
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect()
    };

    let items = page
        .teachers
        .into_iter()
        .map(|t| {
            let region_name = region_names.get(&t.region_id).cloned().unwrap_or_default();
            TeacherView::from_teacher(t, region_name)
        })
        .collect();

    Ok(TeacherPage::new(items, page_index, page_size, page.total))
}

async fn update_teacher(
    teachers: &dyn TeacherRepository,
    regions: &dyn RegionRepository,
    input: UpdateTeacherInput,
) -> Result<Teacher, DomainError> {
    let mut teacher = teachers
        .find_by_uuid(&input.uuid)
        .await?
        .ok_or_else(|| teacher_not_found(&input.uuid))?;

    if teacher.vat != input.vat {
        if let Some(other) = teachers.find_by_vat(&input.vat).await?
            && other.id != teacher.id
        {
            return Err(vat_taken(&input.vat));
        }
        teacher.vat = input.vat;
    }

    teacher.firstname = input.firstname;
    teacher.lastname = input.lastname;

    // An unchanged region id is trusted without a lookup; regions are never deleted here.
    // Ownership lives on the teacher row, so moving it is a single write.
    if teacher.region_id != input.region_id {
        let region = regions
            .find_by_id(input.region_id)
            .await?
            .ok_or_else(|| invalid_region(input.region_id))?;
        teacher.region_id = region.id;
    }

    teachers.update(teacher).await
}

async fn delete_teacher(
    teachers: &dyn TeacherRepository,
    uuid: &str,
) -> Result<Teacher, DomainError> {
    let teacher = teachers
        .find_by_uuid(uuid)
        .await?
        .ok_or_else(|| teacher_not_found(uuid))?;

    teachers.delete(&teacher).await?;
    Ok(teacher)
}

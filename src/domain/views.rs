//! Read models returned to the presentation layer

use serde::{Deserialize, Serialize};

use super::Teacher;

/// Teacher as shown to callers, with the region name denormalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherView {
    pub id: i32,
    pub reference_code: String,
    pub created_at: String,
    pub updated_at: String,
    pub first_name: String,
    pub last_name: String,
    pub tax_id: String,
    pub region_name: String,
}

impl TeacherView {
    pub fn from_teacher(teacher: Teacher, region_name: impl Into<String>) -> Self {
        Self {
            id: teacher.id,
            reference_code: teacher.uuid,
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
            first_name: teacher.firstname,
            last_name: teacher.lastname,
            tax_id: teacher.vat,
            region_name: region_name.into(),
        }
    }
}

/// A bounded window over the teacher list plus totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPage {
    pub items: Vec<TeacherView>,
    pub page_index: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl TeacherPage {
    pub fn new(items: Vec<TeacherView>, page_index: u64, page_size: u64, total: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };

        Self {
            items,
            page_index,
            page_size,
            total_elements: total,
            total_pages,
        }
    }
}

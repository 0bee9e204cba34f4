//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod observer;
pub mod teacher_service;

// Re-export for convenience
pub use observer::{Operation, OperationContext, RegistryObserver, TracingObserver};
pub use teacher_service::{CreateTeacherInput, TeacherService, UpdateTeacherInput};

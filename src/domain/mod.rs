//! Domain layer - Pure business abstractions
//!
//! Entity shapes, read models, repository traits and the domain error type.
//! Nothing here knows about HTTP.

pub mod errors;
pub mod repositories;
pub mod views;

pub use errors::DomainError;
pub use repositories::*;
pub use views::{TeacherPage, TeacherView};

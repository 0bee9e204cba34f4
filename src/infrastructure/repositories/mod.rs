//! Repository implementations using SeaORM

pub mod region_repository;
pub mod teacher_repository;

pub use region_repository::SeaOrmRegionRepository;
pub use teacher_repository::SeaOrmTeacherRepository;

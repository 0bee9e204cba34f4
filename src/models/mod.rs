pub mod region;
pub mod teacher;

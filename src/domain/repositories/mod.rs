//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod student_repository;

pub use student_repository::StudentRepository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;

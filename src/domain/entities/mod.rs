//! Core domain entities.
//!
//! - [`Student`] - A stored student record
//! - [`NewStudent`] - Input for creating a record
//! - [`StudentPatch`] - Partial update merged onto an existing record

pub mod student;

pub use student::{NewStudent, Student, StudentPatch};

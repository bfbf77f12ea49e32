//! DTOs for the student endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStudent, Student, StudentPatch};

/// Request body for `POST /api/students`.
///
/// Every field is declared optional so that a missing field surfaces as a
/// field-level validation error instead of a decode error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "invalid email format")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "age is required"),
        range(min = 1, message = "age must be a positive integer")
    )]
    pub age: Option<i32>,
}

impl CreateStudentRequest {
    /// Converts a validated request into domain input.
    ///
    /// Call only after [`Validate::validate`] succeeded.
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT`/`PATCH /api/students/{id}`.
///
/// All fields are optional. Absent fields, empty strings and `0` leave the
/// stored value unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,

    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,

    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<i32>,
}

impl UpdateStudentRequest {
    /// Drops empty strings so they are neither validated nor written.
    pub fn without_blank_fields(self) -> Self {
        Self {
            name: self.name.filter(|s| !s.is_empty()),
            email: self.email.filter(|s| !s.is_empty()),
            age: self.age,
        }
    }
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        StudentPatch {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

/// JSON representation of a stored student.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
            age: s.age,
        }
    }
}

/// Body returned by create, update and delete.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}

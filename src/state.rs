//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::domain::repositories::StudentRepository;

/// Dependencies shared across requests.
///
/// Holds the storage engine behind its trait so tests can substitute a double.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
}

impl AppState {
    /// Creates application state around a storage implementation.
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}

//! Student entity and its create/update payloads.

/// A stored student record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(id: i64, name: String, email: String, age: i32) -> Self {
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Returns the record with `patch` merged on top.
    ///
    /// A patch field replaces the stored value only when it is present and not
    /// its type's zero value. `""` and `0` are treated exactly like an absent
    /// field, so an update can never blank a name or zero an age.
    pub fn merge(self, patch: StudentPatch) -> Self {
        Self {
            id: self.id,
            name: pick(patch.name, self.name),
            email: pick(patch.email, self.email),
            age: pick(patch.age, self.age),
        }
    }
}

fn pick<T: Default + PartialEq>(incoming: Option<T>, current: T) -> T {
    match incoming {
        Some(value) if value != T::default() => value,
        _ => current,
    }
}

/// Input data for creating a new student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Partial update for an existing student.
///
/// `None`, `""` and `0` all mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl StudentPatch {
    /// Returns true if merging this patch cannot change any field.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().is_none_or(str::is_empty)
            && self.email.as_deref().is_none_or(str::is_empty)
            && self.age.is_none_or(|age| age == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Student {
        Student::new(1, "A".to_string(), "a@x.com".to_string(), 20)
    }

    #[test]
    fn test_merge_keeps_zero_value_fields() {
        let patch = StudentPatch {
            name: Some(String::new()),
            email: Some("b@x.com".to_string()),
            age: Some(0),
        };

        let merged = ann().merge(patch);

        assert_eq!(
            merged,
            Student::new(1, "A".to_string(), "b@x.com".to_string(), 20)
        );
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let patch = StudentPatch {
            age: Some(21),
            ..Default::default()
        };

        let merged = ann().merge(patch);

        assert_eq!(merged.name, "A");
        assert_eq!(merged.email, "a@x.com");
        assert_eq!(merged.age, 21);
    }

    #[test]
    fn test_merge_replaces_every_field() {
        let patch = StudentPatch {
            name: Some("B".to_string()),
            email: Some("b@x.com".to_string()),
            age: Some(30),
        };

        let merged = ann().merge(patch);

        assert_eq!(
            merged,
            Student::new(1, "B".to_string(), "b@x.com".to_string(), 30)
        );
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(StudentPatch::default().is_empty());
        assert!(
            StudentPatch {
                name: Some(String::new()),
                email: None,
                age: Some(0),
            }
            .is_empty()
        );
        assert!(
            !StudentPatch {
                age: Some(3),
                ..Default::default()
            }
            .is_empty()
        );
    }
}

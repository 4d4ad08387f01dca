//! In-memory student record store.
//!
//! All records live in a single map guarded by one exclusive lock, so every
//! operation is linearized against every other. Records are never physically
//! removed; soft-delete flips a tombstone flag and the entry stays for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod error;

pub use error::StoreError;

// ============================================================================
// Student
// ============================================================================

/// A student record, in its wire shape.
///
/// `enrollment_number` is assigned by the store; any caller-supplied value is
/// overwritten on insert, as is `is_deleted`. Missing fields decode to their
/// default values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    pub enrollment_number: String,
    pub name: String,
    pub age: i64,
    pub class: String,
    pub subject: String,
    pub is_deleted: bool,
}

// ============================================================================
// StudentStore
// ============================================================================

/// Store for student records, shared across request handlers.
///
/// Cheap to clone; all clones see the same records.
#[derive(Debug, Clone, Default)]
pub struct StudentStore {
    students: Arc<Mutex<HashMap<String, Student>>>,
}

impl StudentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under a freshly generated identifier.
    ///
    /// Overwrites any caller-supplied `enrollment_number` and clears the
    /// tombstone, then returns the generated identifier. Never fails.
    pub fn insert(&self, mut student: Student) -> String {
        let id = Uuid::new_v4().to_string();
        student.enrollment_number = id.clone();
        student.is_deleted = false;
        self.students.lock().insert(id.clone(), student);
        id
    }

    /// All records whose tombstone is not set, in no guaranteed order.
    pub fn list_active(&self) -> Vec<Student> {
        self.students
            .lock()
            .values()
            .filter(|s| !s.is_deleted)
            .cloned()
            .collect()
    }

    /// Fetch a record by identifier. Tombstoned records report `NotFound`.
    pub fn get(&self, id: &str) -> Result<Student, StoreError> {
        let students = self.students.lock();
        match students.get(id) {
            Some(s) if !s.is_deleted => Ok(s.clone()),
            _ => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Set the tombstone on a record.
    ///
    /// A record that is absent or already deleted reports `NotFound`, so a
    /// second delete of the same identifier fails the same way `get` does.
    pub fn soft_delete(&self, id: &str) -> Result<(), StoreError> {
        let mut students = self.students.lock();
        match students.get_mut(id) {
            Some(s) if !s.is_deleted => {
                s.is_deleted = true;
                Ok(())
            }
            _ => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    /// Number of stored records, tombstoned ones included.
    pub fn len(&self) -> usize {
        self.students.lock().len()
    }

    /// Check if the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.students.lock().is_empty()
    }
}

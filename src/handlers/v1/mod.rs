//! Versioned students API handlers.

mod students;

pub use students::{create_student, delete_student, get_student, list_students};

//! Store — in-memory mapping of student id to [`Student`](crate::Student).
//!
//! Inserts are insert-if-absent: the first record for an id wins and later
//! inserts with the same id leave it untouched.

use std::collections::HashMap;

use crate::types::Student;

/// Result of [`RecordStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was inserted.
    Added,
    /// A record with this id already existed; nothing changed.
    Duplicate,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        self == AddOutcome::Added
    }
}

/// Keyed collection of student records. Iteration order is unspecified.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: HashMap<String, Student>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record unless `id` is already present.
    ///
    /// This never fails. A duplicate id is reported through the returned
    /// [`AddOutcome`] and the existing record is preserved.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>, age: i32) -> AddOutcome {
        let id = id.into();
        if self.records.contains_key(&id) {
            tracing::debug!(%id, "rejected duplicate student id");
            return AddOutcome::Duplicate;
        }

        let student = Student::new(id.clone(), name, age);
        tracing::debug!(%id, "inserted student");
        self.records.insert(id, student);
        AddOutcome::Added
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All stored records, in hash map order.
    pub fn list_all(&self) -> impl Iterator<Item = &Student> {
        self.records.values()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Core types for roster-core.
//!
//! This module defines the [`Student`] record and its line rendering.

/// A single student record.
///
/// Fields are private: a record is immutable once created. The store creates
/// records at insertion time and owns them for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    id: String,
    name: String,
    age: i32,
}

impl Student {
    /// Neither `name` nor `age` is validated; empty names and negative ages
    /// are stored as given.
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}, Name: {}, Age: {}", self.id, self.name, self.age)
    }
}

/// Render a record as a single listing line: `ID: <id>, Name: <name>, Age: <age>`.
pub fn render(student: &Student) -> String {
    student.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

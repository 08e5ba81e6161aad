//! Roster — a [`RecordStore`] bound to an output sink.
//!
//! The store reports outcomes as values; the roster turns them into the
//! notification and listing lines a user sees.

use std::io::Write;

use crate::config::OutputConfig;
use crate::store::{AddOutcome, RecordStore};
use crate::types::render;

/// A [`RecordStore`] that reports every add and listing to `W`.
pub struct Roster<W> {
    store: RecordStore,
    out: W,
    output: OutputConfig,
}

impl<W: Write> Roster<W> {
    /// Empty roster writing to `out`.
    pub fn new(out: W, output: OutputConfig) -> Self {
        Self {
            store: RecordStore::new(),
            out,
            output,
        }
    }

    /// Add a student and write the matching notification line.
    ///
    /// A duplicate id writes `Student with ID <id> already exists` and keeps
    /// the stored record. The sink is flushed after the line is written.
    /// Only sink failures are returned as errors.
    pub fn add(&mut self, id: &str, name: &str, age: i32) -> crate::Result<AddOutcome> {
        let outcome = self.store.add(id, name, age);
        match outcome {
            AddOutcome::Duplicate => writeln!(self.out, "Student with ID {id} already exists")?,
            AddOutcome::Added if self.output.announce_additions => {
                writeln!(self.out, "Added student: {name}")?
            }
            AddOutcome::Added => return Ok(outcome),
        }
        self.out.flush()?;
        Ok(outcome)
    }

    /// Write the header followed by one line per stored record.
    pub fn list_all(&mut self) -> crate::Result<()> {
        tracing::trace!(count = self.store.len(), "listing students");
        writeln!(self.out, "{}", self.output.header)?;
        for student in self.store.list_all() {
            writeln!(self.out, "{}", render(student))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consume the roster, returning the store and the sink.
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

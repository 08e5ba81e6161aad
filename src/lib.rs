//! roster — in-memory student roster.
//!
//! Re-exports [`roster_core`] so that integration tests and the binary import
//! one crate, and hosts the [`demo`] program the binary runs.

pub mod demo;

pub use roster_core::{config, render, AddOutcome, Error, RecordStore, Result, Roster, Student};

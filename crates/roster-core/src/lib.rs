//! roster-core — in-memory student roster.
//!
//! This crate holds the keyed [`RecordStore`], the [`Student`] record it
//! owns, and the [`Roster`] shell that turns store outcomes into
//! human-readable lines on an output sink.
//!
//! # Architecture
//!
//! ```text
//! caller ──► Roster ──► RecordStore
//!              │
//!              └──► output sink (stdout, Vec<u8>, …)
//! ```
//!
//! Everything is single-threaded and synchronous. There is no global state;
//! callers construct and own the store explicitly.

pub mod config;
pub mod error;
pub mod roster;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use roster::Roster;
pub use store::{AddOutcome, RecordStore};
pub use types::{render, Student};

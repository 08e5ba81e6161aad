//! Test builders — ergonomic constructors for rosters and their output.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use roster::config::{Config, OutputConfig};
use roster::{RecordStore, Roster};

/// A roster writing into an in-memory buffer with default output settings.
pub fn buffered_roster() -> Roster<Vec<u8>> {
    Roster::new(Vec::new(), OutputConfig::default())
}

/// Default config, without touching the filesystem.
pub fn default_config() -> Config {
    Config::defaults()
}

/// Consume a buffered roster and return its store and everything it wrote.
pub fn finish(roster: Roster<Vec<u8>>) -> (RecordStore, String) {
    let (store, out) = roster.into_parts();
    (store, String::from_utf8(out).expect("roster output must be UTF-8"))
}

/// Build a store from `(id, name, age)` triples, in order.
pub fn store_of(rows: &[(&str, &str, i32)]) -> RecordStore {
    let mut store = RecordStore::new();
    for &(id, name, age) in rows {
        store.add(id, name, age);
    }
    store
}

/// The listing line for one record.
pub fn line(id: &str, name: &str, age: i32) -> String {
    format!("ID: {id}, Name: {name}, Age: {age}")
}

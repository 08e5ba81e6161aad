//! Demo program: two fixed students, then a full listing.

use std::io::Write;

use roster_core::config::Config;
use roster_core::Roster;

/// Students the demo inserts, as `(id, name, age)`.
pub const DEMO_STUDENTS: &[(&str, &str, i32)] =
    &[("1001", "Alice Johnson", 20), ("1002", "Bob Smith", 21)];

/// Run the demo against `out` and hand back the populated roster.
pub fn run<W: Write>(config: &Config, out: W) -> roster_core::Result<Roster<W>> {
    let mut roster = Roster::new(out, config.output.clone());
    for &(id, name, age) in DEMO_STUDENTS {
        roster.add(id, name, age)?;
    }
    roster.list_all()?;
    Ok(roster)
}

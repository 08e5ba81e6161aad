//! Domain-specific assertion macros for roster harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! listing line was missing or repeated.

/// Assert that `$output` contains exactly one line equal to `$line`.
///
/// ```rust
/// assert_line_once!(output, "ID: 1001, Name: Alice Johnson, Age: 20");
/// ```
#[macro_export]
macro_rules! assert_line_once {
    ($output:expr, $line:expr) => {{
        let output: &str = &$output;
        let expected: &str = &$line;
        let hits = output.lines().filter(|l| *l == expected).count();
        if hits != 1 {
            panic!(
                "assert_line_once! failed: {:?} appeared {} times.\n  output:\n{}",
                expected, hits, output
            );
        }
    }};
}

/// Assert that a listing has the given header followed by `$n` record lines.
#[macro_export]
macro_rules! assert_listing_len {
    ($output:expr, $header:expr, $n:expr) => {{
        let output: &str = &$output;
        let header: &str = $header;
        let lines: Vec<&str> = output.lines().collect();
        let start = lines
            .iter()
            .position(|l| *l == header)
            .unwrap_or_else(|| panic!("assert_listing_len! failed: no header {:?} in\n{}", header, output));
        let records = lines.len() - start - 1;
        if records != $n {
            panic!(
                "assert_listing_len! failed:\n  expected: {} record lines\n  actual:   {}\n  output:\n{}",
                $n, records, output
            );
        }
    }};
}

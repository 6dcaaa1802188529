//! Error diagnostics
//!
//! Store failures are reported to callers inside a failure envelope. The
//! message carries the deepest cause in the error chain (typically the
//! SQLite message), or the error's own text when it has no cause.

use std::error::Error;

/// Text of the innermost `source()` of `err`, or `err` itself
pub fn most_specific_message(err: &(dyn Error + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

//! Errors produced while decoding values.

use thiserror::Error;

/// Failure to decode a value from its interchange form.
///
/// Decoding an integer is the only fallible operation in this crate.
/// Construction, comparison, traversal and encoding are all total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input was neither a JSON integer nor a decimal integer string.
    #[error("not an integer or an integer literal")]
    NotAnInteger,
}

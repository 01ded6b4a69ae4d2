//! Conversion failures between raw tokens, [`crate::Value`]s, and fields.

use std::num::ParseIntError;

use thiserror::Error;

use crate::ValueKind;

/// Errors raised while converting a token or storing a value into a field.
///
/// Generated [`crate::Schema::assign`] implementations return this type; the
/// parser rewraps it with the offending cli name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The token is not a valid integer.
    #[error("'{token}' is not an integer: {source}")]
    InvalidInt {
        /// The rejected token or array element.
        token: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The token is not `true` or `false`.
    #[error("'{token}' is not a boolean")]
    InvalidBool {
        /// The rejected token.
        token: String,
    },

    /// The integer does not fit the field's integer type.
    #[error("{value} is out of range for {target}")]
    OutOfRange {
        /// The parsed value.
        value: i64,
        /// Name of the destination integer type.
        target: &'static str,
    },

    /// The value's kind differs from the field's kind.
    #[error("expected a {expected} value but found {found}")]
    KindMismatch {
        /// Kind the field stores.
        expected: ValueKind,
        /// Kind that was supplied.
        found: ValueKind,
    },

    /// No field lives at the given index path.
    #[error("no field at path {path:?}")]
    UnknownPath {
        /// The unresolved index path.
        path: Vec<usize>,
    },
}

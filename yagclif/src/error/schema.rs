//! Failures detected while turning a schema description into parameters.

use thiserror::Error;

/// Errors raised while extracting a [`crate::ParameterSet`] from a schema.
///
/// These are always reported when the schema is built, never during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A constraint clause contained more than one `:` separator.
    #[error("error parsing constraint '{clause}' at field {field}: too many ':' separators")]
    ConstraintSyntax {
        /// Field carrying the malformed clause.
        field: String,
        /// The offending clause, verbatim.
        clause: String,
    },

    /// A constraint clause used a key outside the recognised set.
    #[error("error parsing constraint '{clause}' at field {field}: unknown key '{key}'")]
    UnknownConstraint {
        /// Field carrying the unknown key.
        field: String,
        /// The offending clause, verbatim.
        clause: String,
        /// The unrecognised key.
        key: String,
    },

    /// A nested schema field carried a constraint other than `omit`.
    #[error("field {field} is a nested schema and cannot take constraint '{clause}'")]
    ConstraintOnNested {
        /// Nested field name.
        field: String,
        /// The rejected clause.
        clause: String,
    },

    /// A non-array field declared a delimiter.
    #[error("parameter {field}: delimiter on non array type")]
    DelimiterOnScalar {
        /// Field name.
        field: String,
    },

    /// An array field declared an empty delimiter.
    #[error("parameter {field}: array delimiter cannot be empty")]
    EmptyDelimiter {
        /// Field name.
        field: String,
    },

    /// A mandatory or boolean field declared a default or an env source.
    #[error("parameter {field}: can not be mandatory or boolean and have a default value")]
    DefaultNotAllowed {
        /// Field name.
        field: String,
    },

    /// A boolean field was declared mandatory.
    #[error("parameter {field}: boolean type can not be mandatory")]
    MandatoryBool {
        /// Field name.
        field: String,
    },

    /// A literal default or env value does not convert to the field type.
    #[error("parameter {field}: invalid {origin} value '{value}': {reason}")]
    InvalidDefault {
        /// Field name.
        field: String,
        /// Where the value came from, e.g. `default` or `env FOO`.
        origin: String,
        /// The rejected value.
        value: String,
        /// Conversion failure description.
        reason: String,
    },

    /// Two parameters resolve to the same cli name.
    #[error("conflict for cli name {name} struct fields {first} and {second}")]
    NameConflict {
        /// The shared cli name.
        name: String,
        /// Field that claimed the name first.
        first: String,
        /// Field that collided with it.
        second: String,
    },
}

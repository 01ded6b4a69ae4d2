//! Schema description consumed by the parameter extractor.
//!
//! A schema is a struct whose fields are described once, in declaration
//! order, by [`Schema::fields`] and written to through [`Schema::assign`].
//! `#[derive(Schema)]` generates both; hand-written impls are supported for
//! types the derive cannot see through.

use crate::{Value, ValueError, ValueKind};

/// A struct whose fields can be bound from command-line tokens.
///
/// # Examples
///
/// ```
/// use yagclif::Schema;
///
/// #[derive(Debug, Default, Schema)]
/// struct Serve {
///     #[yagclif("shortname:p;default:8080")]
///     port: u16,
///     #[yagclif("description:enable request logging")]
///     verbose: bool,
/// }
///
/// let (serve, rest) = yagclif::parse_from::<Serve, _>(["-p", "9000", "extra"]).unwrap();
/// assert_eq!(serve.port, 9000);
/// assert!(!serve.verbose);
/// assert_eq!(rest, vec!["extra".to_owned()]);
/// ```
pub trait Schema: Default {
    /// Field descriptions in declaration order, one per struct field.
    fn fields() -> Vec<FieldSpec>;

    /// Store `value` into the field reached by `path`.
    ///
    /// `path` holds one declaration index per nesting level, outermost first.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when no value field lives at `path` or the value
    /// does not convert to the field's type.
    fn assign(&mut self, path: &[usize], value: Value) -> Result<(), ValueError>;
}

/// Description of one struct field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field identifier as declared.
    pub name: &'static str,
    /// Declaration index within the owning struct.
    pub index: usize,
    /// Raw constraint string, empty when the field carries none.
    pub tag: &'static str,
    /// What the field holds.
    pub shape: FieldShape,
}

impl FieldSpec {
    /// Describes a field.
    #[must_use]
    pub const fn new(name: &'static str, index: usize, tag: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            index,
            tag,
            shape,
        }
    }
}

/// Shape of a schema field.
#[derive(Debug, Clone, Copy)]
pub enum FieldShape {
    /// A directly bindable value.
    Value(ValueKind),
    /// An embedded schema whose fields are flattened into the parent.
    Nested(fn() -> Vec<FieldSpec>),
    /// Excluded from binding.
    Omitted,
}

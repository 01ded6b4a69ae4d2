//! Schema extraction: field descriptions to flat, ordered parameters.

use crate::constraint::{is_omitted, parse_constraints};
use crate::{FieldShape, FieldSpec, Parameter, Schema, SchemaError};

/// Extract the parameters of `T` in declaration order.
///
/// Nested schema fields are expanded in place, so the result is the
/// depth-first flattening of the whole schema. Omitted fields produce
/// nothing. Name conflicts and default values are not checked here; see
/// [`crate::ParameterSet::from_schema`].
///
/// # Errors
///
/// Returns [`SchemaError`] for malformed constraint strings or incoherent
/// metadata on any field.
pub fn extract<T: Schema>() -> Result<Vec<Parameter>, SchemaError> {
    let mut parameters = Vec::new();
    extract_into(&T::fields(), &[], &mut parameters)?;
    Ok(parameters)
}

fn extract_into(
    fields: &[FieldSpec],
    prefix: &[usize],
    out: &mut Vec<Parameter>,
) -> Result<(), SchemaError> {
    for spec in fields {
        if is_omitted(spec.tag) {
            continue;
        }
        let mut path = prefix.to_vec();
        path.push(spec.index);
        match spec.shape {
            FieldShape::Omitted => {}
            FieldShape::Value(kind) => out.push(Parameter::from_field(spec, kind, path)?),
            FieldShape::Nested(inner) => {
                reject_nested_constraints(spec)?;
                extract_into(&inner(), &path, out)?;
            }
        }
    }
    Ok(())
}

fn reject_nested_constraints(spec: &FieldSpec) -> Result<(), SchemaError> {
    if parse_constraints(spec.name, spec.tag)?.is_empty() {
        return Ok(());
    }
    Err(SchemaError::ConstraintOnNested {
        field: spec.name.to_owned(),
        clause: spec.tag.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for schema flattening.

    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface broken fixtures"
    )]

    use super::*;
    use crate::{Value, ValueError, ValueKind};

    #[derive(Debug, Default)]
    struct Inner {
        depth: i64,
    }

    impl Schema for Inner {
        fn fields() -> Vec<FieldSpec> {
            vec![FieldSpec::new("depth", 0, "default:42", FieldShape::Value(ValueKind::Int))]
        }

        fn assign(&mut self, path: &[usize], value: Value) -> Result<(), ValueError> {
            match path {
                [0] => {
                    self.depth = crate::FieldValue::from_value(value)?;
                    Ok(())
                }
                _ => Err(ValueError::UnknownPath {
                    path: path.to_vec(),
                }),
            }
        }
    }

    #[derive(Debug, Default)]
    struct Outer {
        name: String,
        inner: Inner,
        _skipped: Vec<f64>,
        flag: bool,
    }

    impl Schema for Outer {
        fn fields() -> Vec<FieldSpec> {
            vec![
                FieldSpec::new("name", 0, "", FieldShape::Value(ValueKind::String)),
                FieldSpec::new("inner", 1, "", FieldShape::Nested(Inner::fields)),
                FieldSpec::new("_skipped", 2, "omit", FieldShape::Omitted),
                FieldSpec::new("flag", 3, "shortname:f", FieldShape::Value(ValueKind::Bool)),
            ]
        }

        fn assign(&mut self, path: &[usize], value: Value) -> Result<(), ValueError> {
            match path {
                [0] => self.name = crate::FieldValue::from_value(value)?,
                [1, rest @ ..] => self.inner.assign(rest, value)?,
                [3] => self.flag = crate::FieldValue::from_value(value)?,
                _ => {
                    return Err(ValueError::UnknownPath {
                        path: path.to_vec(),
                    });
                }
            }
            Ok(())
        }
    }

    #[test]
    fn flattens_nested_fields_in_declaration_order() {
        let parameters = extract::<Outer>().expect("valid schema");
        let names: Vec<_> = parameters.iter().map(Parameter::name).collect();
        assert_eq!(names, vec!["name", "depth", "flag"]);
        let paths: Vec<_> = parameters.iter().map(Parameter::path).collect();
        assert_eq!(paths, vec![&[0][..], &[1, 0][..], &[3][..]]);
        let indices: Vec<_> = parameters.iter().map(Parameter::index).collect();
        assert_eq!(indices, vec![0, 0, 3]);
    }

    #[derive(Debug, Default)]
    struct TaggedNested {
        inner: Inner,
    }

    impl Schema for TaggedNested {
        fn fields() -> Vec<FieldSpec> {
            vec![FieldSpec::new("inner", 0, "shortname:i", FieldShape::Nested(Inner::fields))]
        }

        fn assign(&mut self, path: &[usize], value: Value) -> Result<(), ValueError> {
            match path {
                [0, rest @ ..] => self.inner.assign(rest, value),
                _ => Err(ValueError::UnknownPath {
                    path: path.to_vec(),
                }),
            }
        }
    }

    #[test]
    fn rejects_constraints_on_nested_fields() {
        assert!(matches!(
            extract::<TaggedNested>(),
            Err(SchemaError::ConstraintOnNested { .. })
        ));
    }
}

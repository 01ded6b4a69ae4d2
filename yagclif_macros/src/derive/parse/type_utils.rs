//! Type classification helpers.
//!
//! The derive cannot see trait impls, so it decides from the spelling of a
//! field's type whether it binds a value or embeds another schema. The check
//! is shallow and only looks at the last path segment, so both `Vec<T>` and
//! `std::vec::Vec<T>` match.

use syn::{PathArguments, Type};

/// Scalar type names routed through `FieldValue`.
///
/// The list is wider than what `FieldValue` implements so that unsupported
/// scalars such as `f64` report a missing `FieldValue` impl rather than a
/// missing `Schema` impl.
const SCALARS: &[&str] = &[
    "bool", "char", "str", "String", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Container names routed through `FieldValue`.
const CONTAINERS: &[&str] = &["Vec", "Option"];

/// Returns `true` when `ty` should be bound as a value rather than flattened.
pub(crate) fn is_value_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return false;
            };
            let name = last.ident.to_string();
            match &last.arguments {
                PathArguments::None => SCALARS.contains(&name.as_str()),
                PathArguments::AngleBracketed(_) => CONTAINERS.contains(&name.as_str()),
                PathArguments::Parenthesized(_) => false,
            }
        }
        Type::Group(group) => is_value_type(&group.elem),
        Type::Paren(paren) => is_value_type(&paren.elem),
        Type::Reference(_) | Type::Array(_) | Type::Slice(_) | Type::Tuple(_) => true,
        _ => false,
    }
}

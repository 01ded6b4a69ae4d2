//! Input gathering for the `Schema` derive macro.
//!
//! Collects the struct identifier, generics, and per-field metadata in one
//! pass so expansion can fail fast with a spanned error.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::type_utils::is_value_type;
use super::{is_omitted, parse_field_tag, parse_struct_attrs};

/// How a field takes part in binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Value,
    Nested,
    Omitted,
}

/// One parsed struct field.
pub(crate) struct SchemaField {
    pub(crate) member: syn::Ident,
    /// Field name with any `r#` prefix removed.
    pub(crate) name: String,
    pub(crate) ty: syn::Type,
    pub(crate) tag: String,
    pub(crate) kind: FieldKind,
}

/// Everything the generator needs.
pub(crate) struct SchemaInput {
    pub(crate) ident: syn::Ident,
    pub(crate) generics: syn::Generics,
    pub(crate) crate_path: Option<syn::Path>,
    pub(crate) fields: Vec<SchemaField>,
}

/// Gathers information from the user-provided struct.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<SchemaInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Schema requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Schema can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(member) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Schema requires named fields"));
        };
        let tag = parse_field_tag(field)?;
        let kind = if is_omitted(&tag) {
            FieldKind::Omitted
        } else if is_value_type(&field.ty) {
            FieldKind::Value
        } else {
            FieldKind::Nested
        };
        fields.push(SchemaField {
            name: member.unraw().to_string(),
            member,
            ty: field.ty.clone(),
            tag,
            kind,
        });
    }

    Ok(SchemaInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        crate_path: struct_attrs.crate_path,
        fields,
    })
}

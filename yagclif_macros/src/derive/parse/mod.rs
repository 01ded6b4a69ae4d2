//! Attribute and input parsing for `#[derive(Schema)]`.

mod input;
mod type_utils;

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr};

pub(crate) use input::{FieldKind, SchemaField, SchemaInput, parse_input};

/// Name of the helper attribute on structs and fields.
const ATTRIBUTE: &str = "yagclif";

/// Clause that excludes a field from binding.
const OMIT_CLAUSE: &str = "omit";

/// Separator between clauses in a constraint string.
const CLAUSE_DELIMITER: char = ';';

/// Struct-level `#[yagclif(...)]` settings.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    pub(crate) crate_path: Option<syn::Path>,
}

fn yagclif_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE))
}

/// Parses struct-level attributes.
///
/// Only `crate = "path"` is recognised; anything else is rejected so typos
/// surface at compile time.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in yagclif_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                out.crate_path = Some(parse_crate_path(&meta)?);
                Ok(())
            } else {
                Err(meta.error("unsupported yagclif struct attribute, expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(out)
}

fn parse_crate_path(meta: &ParseNestedMeta) -> syn::Result<syn::Path> {
    let lit: LitStr = meta.value()?.parse()?;
    syn::parse_str(&lit.value()).map_err(|err| syn::Error::new(lit.span(), err))
}

/// Reads the constraint string of a field.
///
/// Returns the empty string when the field has no `#[yagclif]` attribute.
pub(crate) fn parse_field_tag(field: &syn::Field) -> syn::Result<String> {
    let mut found = yagclif_attrs(&field.attrs);
    let Some(first) = found.next() else {
        return Ok(String::new());
    };
    if let Some(extra) = found.next() {
        return Err(syn::Error::new_spanned(
            extra,
            "a field takes a single #[yagclif(\"...\")] attribute; join clauses with ';'",
        ));
    }
    Ok(first.parse_args::<LitStr>()?.value())
}

/// Whether the constraint string carries the `omit` clause.
pub(crate) fn is_omitted(tag: &str) -> bool {
    tag.split(CLAUSE_DELIMITER).any(|clause| clause == OMIT_CLAUSE)
}

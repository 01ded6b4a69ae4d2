//! Procedural macros for `yagclif`.
//!
//! `#[derive(Schema)]` implements `yagclif::Schema` for a struct with named
//! fields. Each field may carry one `#[yagclif("clause;clause")]` attribute
//! holding its constraint string; the struct may carry
//! `#[yagclif(crate = "path")]` when `yagclif` is renamed in `Cargo.toml`.
//!
//! Field types are classified by their spelling. `bool`, `String`, the
//! primitive integers, and `Vec<_>` are value fields; any other type must
//! itself implement `Schema` and is flattened into the parent. A field whose
//! constraint string contains `omit` is skipped and only needs `Default`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `yagclif::Schema`.
#[proc_macro_derive(Schema, attributes(yagclif))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

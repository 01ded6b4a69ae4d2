//! Expansion of `#[derive(Schema)]`.

mod generate;
mod parse;

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// Parse `input` and generate its `Schema` impl.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let schema = parse::parse_input(input)?;
    let krate = runtime_path(schema.crate_path.as_ref());
    Ok(generate::schema_impl(&schema, &krate))
}

/// Prefix for every runtime item the generated impl names.
///
/// `#[yagclif(crate = "...")]` replaces it for renamed dependencies. The
/// default stays unanchored so `yagclif` itself, which declares
/// `extern crate self as yagclif;`, can derive `Schema` on its own types.
fn runtime_path(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { yagclif }, |path| quote! { #path })
}

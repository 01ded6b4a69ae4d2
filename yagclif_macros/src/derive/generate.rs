//! Token generation for the `Schema` impl.

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::parse::{FieldKind, SchemaField, SchemaInput};

/// Builds `impl Schema for <struct>`.
pub(crate) fn schema_impl(input: &SchemaInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let specs = input
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| field_spec(index, field, krate));
    let arms: Vec<_> = input
        .fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| assign_arm(index, field, krate))
        .collect();
    let consume = arms.is_empty().then(|| quote! { let _ = value; });

    quote! {
        impl #impl_generics #krate::Schema for #ident #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<#krate::FieldSpec> {
                ::std::vec![#(#specs),*]
            }

            fn assign(
                &mut self,
                path: &[usize],
                value: #krate::Value,
            ) -> ::core::result::Result<(), #krate::ValueError> {
                #consume
                match path {
                    #(#arms)*
                    _ => {
                        return ::core::result::Result::Err(#krate::ValueError::UnknownPath {
                            path: path.to_vec(),
                        });
                    }
                }
                ::core::result::Result::Ok(())
            }
        }
    }
}

fn field_spec(index: usize, field: &SchemaField, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let tag = &field.tag;
    let ty = &field.ty;
    let position = Literal::usize_unsuffixed(index);
    let shape = match field.kind {
        FieldKind::Value => {
            quote! { #krate::FieldShape::Value(<#ty as #krate::FieldValue>::KIND) }
        }
        FieldKind::Nested => {
            quote! { #krate::FieldShape::Nested(<#ty as #krate::Schema>::fields) }
        }
        FieldKind::Omitted => quote! { #krate::FieldShape::Omitted },
    };
    quote! { #krate::FieldSpec::new(#name, #position, #tag, #shape) }
}

fn assign_arm(index: usize, field: &SchemaField, krate: &TokenStream) -> Option<TokenStream> {
    let member = &field.member;
    let ty = &field.ty;
    let position = Literal::usize_unsuffixed(index);
    match field.kind {
        FieldKind::Value => Some(quote! {
            [#position] => {
                self.#member = <#ty as #krate::FieldValue>::from_value(value)?;
            }
        }),
        FieldKind::Nested => Some(quote! {
            [#position, rest @ ..] => {
                <#ty as #krate::Schema>::assign(&mut self.#member, rest, value)?;
            }
        }),
        FieldKind::Omitted => None,
    }
}

//! Struct-specific `Properties` derivation.
//!
//! This module turns each field into the statements that push its name and, if
//! requested, forward to its type's own `Properties` implementation.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    case::RenameRule,
    crate_path,
    field::{parse_field_options, FieldOptions},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) body: TokenStream,
    pub(crate) nested_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    data: DataStruct,
    rename_all: Option<RenameRule>,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let properties_path = crate_path("Properties");
    let mut statements = Vec::new();
    let mut nested_generics = Vec::new();

    let named = matches!(data.fields, Fields::Named(_));
    for field in data.fields {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;

        if named && options.has_own_name() {
            let name = property_name(field.ident.as_ref(), &options, rename_all);
            statements.push(quote_spanned! { span =>
                names.push(#name);
            });
        }

        if options.walks_type() {
            let ty = &field.ty;
            crate::generics::collect_generics_from_type(ty, generics, &mut nested_generics);
            statements.push(quote_spanned! { span =>
                <#ty as #properties_path>::collect_properties(names);
            });
        }
    }

    Ok(StructDeriveOutput {
        body: quote! { #(#statements)* },
        nested_generics,
    })
}

fn property_name(
    ident: Option<&Ident>,
    options: &FieldOptions,
    rename_all: Option<RenameRule>,
) -> String {
    if let Some(rename) = &options.rename {
        return rename.clone();
    }
    let field = ident.map(|ident| ident.unraw().to_string()).unwrap_or_default();
    match rename_all {
        Some(rule) => rule.apply_to_field(&field),
        None => field,
    }
}

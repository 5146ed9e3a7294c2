//! Derive macros for `snapshot-serializers`.
//!
//! This crate generates the `Properties` implementation behind
//! `#[derive(Properties)]`. It:
//! - reads `#[serde(...)]` container and field attributes so the listed names
//!   match the serialized keys
//! - reads `#[properties(...)]` field attributes for nesting, skipping, and
//!   renaming
//! - emits a `Properties` implementation that pushes each name into a collector
//!
//! It does **not** match or rewrite anything. That lives in the main
//! `snapshot-serializers` crate and happens at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod attrs;
mod case;
mod container;
mod derive_struct;
mod field;
mod generics;
use container::{parse_container_options, ContainerOptions};
use derive_struct::derive_struct;
use generics::add_properties_bounds;

/// Derives `snapshot_serializers::Properties` for structs.
///
/// The generated implementation lists the key each field serializes to, in
/// declaration order, so selectors can be checked against the type with
/// `Property::of::<T>()`.
///
/// # Container Attributes
///
/// - `#[serde(rename_all = "...")]` - Field names are converted with the same rules `serde`
///   applies (`lowercase`, `UPPERCASE`, `PascalCase`, `camelCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case`, `SCREAMING-KEBAB-CASE`).
/// - `#[properties(rename_all = "...")]` - Same, overriding the serde setting.
///
/// # Field Attributes
///
/// - **No annotation**: The field contributes its (possibly renamed) name.
///
/// - `#[properties(nested)]`: The field also contributes every name of its own type, which must
///   implement `Properties`. Works through references, `Box`/`Rc`/`Arc`, `Option`, sequences,
///   sets and map values.
///
/// - `#[properties(skip)]` or `#[serde(skip)]` / `#[serde(skip_serializing)]`: The field
///   contributes nothing.
///
/// - `#[properties(rename = "...")]` or `#[serde(rename = "...")]`: Overrides the field's name.
///
/// - `#[serde(flatten)]`: The field contributes its type's names instead of its own.
///
/// For tuple structs only `#[properties(nested)]` fields contribute, since positional fields have
/// no names. Enums and unions are rejected at compile time.
#[proc_macro_derive(Properties, attributes(properties))]
pub fn derive_properties(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the snapshot-serializers crate root.
///
/// Handles crate renaming (e.g., `snap = { package = "snapshot-serializers", ... }`)
/// and internal usage (when derive is used inside the crate itself).
fn crate_root() -> TokenStream {
    match crate_name("snapshot-serializers") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::snapshot_serializers },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { rename_all } = parse_container_options(&attrs)?;

    let output = match data {
        Data::Struct(data) => derive_struct(data, rename_all, &generics)?,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`Properties` cannot be derived for enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Properties` cannot be derived for unions",
            ));
        }
    };

    let properties_path = crate_path("Properties");
    let names_path = crate_path("PropertyNames");
    let bounded = add_properties_bounds(generics, &output.nested_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();
    let body = &output.body;

    Ok(quote! {
        impl #impl_generics #properties_path for #ident #ty_generics #where_clause {
            fn collect_properties(names: &mut #names_path) {
                if !names.enter::<Self>() {
                    return;
                }
                #body
            }
        }
    })
}

//! Generic type parameter handling and trait bound management.
//!
//! Only parameters that appear in nested or flattened field types get a
//! `Properties` bound. A `PhantomData<T>` or a plain `id: T` field never needs
//! `T: Properties`, since those fields contribute just their own name.

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            for segment in &path.path.segments {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }
            }

            if let Some(ident) = path.path.get_ident() {
                for param in generics.type_params() {
                    if *ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        _ => {}
    }
}

/// Adds `Properties` bounds to generic parameters used in nested fields.
pub(crate) fn add_properties_bounds(
    mut generics: syn::Generics,
    nested_generics: &[Ident],
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if nested_generics.iter().any(|g| g == &param.ident) {
            let properties_path = crate_path("Properties");
            param.bounds.push(parse_quote!(#properties_path));
        }
    }
    generics
}

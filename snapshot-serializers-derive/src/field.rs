//! Parsing of field attributes into a property decision.
//!
//! Both `#[properties(...)]` and the relevant subset of `#[serde(...)]` feed into
//! one [`FieldOptions`], with `#[properties(...)]` winning on conflicts.

use syn::{Attribute, Meta, Result};

use crate::attrs::{serialize_name, skip, string_value};

/// What a single field contributes to the property list.
///
/// | Attributes | Own name | Nested names |
/// |------------|----------|--------------|
/// | None | yes | no |
/// | `#[properties(nested)]` | yes | yes |
/// | `#[serde(flatten)]` | no | yes |
/// | `#[properties(skip)]`, `#[serde(skip)]` | no | no |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldOptions {
    /// Explicit key name, from `rename`.
    pub(crate) rename: Option<String>,
    /// Contributes nothing at all.
    pub(crate) skip: bool,
    /// Also contributes the field type's names.
    pub(crate) nested: bool,
    /// Contributes the field type's names in place of its own.
    pub(crate) flatten: bool,
}

impl FieldOptions {
    /// Whether the field's own key appears in the serialized object.
    pub(crate) fn has_own_name(&self) -> bool {
        !self.skip && !self.flatten
    }

    /// Whether the field type's names are collected too.
    pub(crate) fn walks_type(&self) -> bool {
        !self.skip && (self.nested || self.flatten)
    }
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    let mut serde_rename = None;
    let mut own_rename = None;

    for attr in attrs {
        if attr.path().is_ident("serde") {
            if let Meta::List(list) = &attr.meta {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        if let Some(name) = serialize_name(&meta)? {
                            serde_rename = Some(name);
                        }
                        Ok(())
                    } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing")
                    {
                        options.skip = true;
                        Ok(())
                    } else if meta.path.is_ident("flatten") {
                        options.flatten = true;
                        Ok(())
                    } else {
                        skip(&meta)
                    }
                })?;
            }
            continue;
        }

        if !attr.path().is_ident("properties") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("nested") {
                        options.nested = true;
                        Ok(())
                    } else if meta.path.is_ident("skip") {
                        options.skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        own_rename = Some(string_value(&meta)?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `nested`, `skip` or `rename`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected an option, e.g. #[properties(nested)]",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for #[properties]",
                ));
            }
        }
    }

    if options.skip && options.nested {
        return Err(syn::Error::new_spanned(
            attrs
                .iter()
                .find(|attr| attr.path().is_ident("properties")),
            "`skip` cannot be combined with `nested`",
        ));
    }

    options.rename = own_rename.or(serde_rename);
    Ok(options)
}

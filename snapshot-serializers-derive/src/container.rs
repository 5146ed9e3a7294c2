//! Container-level attribute parsing for `#[derive(Properties)]`.
//!
//! This module handles attributes on the struct itself, not on fields.

use syn::{meta::ParseNestedMeta, Attribute, Meta, Result};

use crate::{
    attrs::{serialize_name, skip, string_value},
    case::RenameRule,
};

/// Options parsed from container-level `#[serde(...)]` and `#[properties(...)]`.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Case conversion applied to every field name without an explicit rename.
    pub(crate) rename_all: Option<RenameRule>,
}

fn parse_rule(meta: &ParseNestedMeta<'_>, rule: &str) -> Result<RenameRule> {
    rule.parse()
        .map_err(|()| meta.error(format!("unknown rename rule `rename_all = {rule:?}`")))
}

/// Parses container-level attributes.
///
/// `#[properties(rename_all = "...")]` takes precedence over serde's setting.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut serde_rule = None;
    let mut own_rule = None;

    for attr in attrs {
        if attr.path().is_ident("serde") {
            if let Meta::List(list) = &attr.meta {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename_all") {
                        if let Some(rule) = serialize_name(&meta)? {
                            serde_rule = Some(parse_rule(&meta, &rule)?);
                        }
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
                    if meta.path.is_ident("rename_all") {
                        let rule = string_value(&meta)?;
                        own_rule = Some(parse_rule(&meta, &rule)?);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `rename_all`",
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
                    "bare #[properties] has no meaning on a container",
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for container-level #[properties]",
                ));
            }
        }
    }

    Ok(ContainerOptions {
        rename_all: own_rule.or(serde_rule),
    })
}

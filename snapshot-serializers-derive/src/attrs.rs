//! Helpers shared by container and field attribute parsing.
//!
//! `#[serde(...)]` attributes belong to another crate, so anything this derive
//! does not care about must be consumed and ignored rather than rejected.

use proc_macro2::TokenStream;
use syn::{meta::ParseNestedMeta, Expr, LitStr, Result, Token};

/// Reads `key = "value"`.
pub(crate) fn string_value(meta: &ParseNestedMeta<'_>) -> Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

/// Reads the serialize-side name from either `key = "value"` or
/// `key(serialize = "value", deserialize = "...")`.
///
/// Returns `None` when only a deserialize-side name is given.
pub(crate) fn serialize_name(meta: &ParseNestedMeta<'_>) -> Result<Option<String>> {
    if meta.input.peek(Token![=]) {
        return string_value(meta).map(Some);
    }

    let mut name = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            name = Some(string_value(&inner)?);
            Ok(())
        } else {
            skip(&inner)
        }
    })?;
    Ok(name)
}

/// Consumes whatever follows a nested meta path: nothing, `= expr`, or `(...)`.
pub(crate) fn skip(meta: &ParseNestedMeta<'_>) -> Result<()> {
    if meta.input.peek(Token![=]) {
        let _: Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        let _: TokenStream = content.parse()?;
    }
    Ok(())
}

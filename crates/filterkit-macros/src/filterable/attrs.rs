//! Attribute parsing for the Filterable derive macro.
//!
//! Parses the `#[filter(...)]` field attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[filter(...)]`.
#[derive(Debug, Clone, Default)]
pub struct FilterAttr {
    /// Leave this field out of the description.
    pub skip: bool,
    /// Custom key (default: field name).
    pub rename: Option<String>,
}

impl Parse for FilterAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FilterAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                }

                // rename = "key"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        if s.value().is_empty() {
                            return Err(Error::new(s.span(), "rename must not be empty"));
                        }
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown filter attribute. Expected: skip or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[filter(...)]` attributes from a field's attributes.
///
/// Multiple `#[filter]` attributes on one field are merged.
pub fn parse_filter_attrs(attrs: &[Attribute]) -> Result<FilterAttr> {
    let mut merged = FilterAttr::default();
    for attr in attrs {
        if attr.path().is_ident("filter") {
            let parsed = attr.parse_args::<FilterAttr>()?;
            merged.skip |= parsed.skip;
            if parsed.rename.is_some() {
                merged.rename = parsed.rename;
            }
        }
    }
    Ok(merged)
}

//! Implementation of the `#[derive(Filterable)]` macro.
//!
//! This macro generates an implementation of the `Filterable` trait and
//! key constants for the struct's described fields.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_filter_attrs;

/// Main implementation of the Filterable derive macro.
pub fn filterable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Filterable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Filterable can only be derived for structs",
            ))
        }
    };

    let mut descriptors: Vec<TokenStream> = Vec::new();
    let mut key_constants: Vec<TokenStream> = Vec::new();
    let mut seen_keys: Vec<String> = Vec::new();
    let mut seen_consts: Vec<(String, String)> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let filter_attrs = parse_filter_attrs(&field.attrs)?;
        if filter_attrs.skip {
            continue;
        }

        let key = filter_attrs
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        if seen_keys.contains(&key) {
            return Err(Error::new(
                field.span(),
                format!("duplicate filter key '{}'", key),
            ));
        }
        seen_keys.push(key.clone());

        let const_str = to_screaming_snake_case(&key);
        if let Some((_, other)) = seen_consts.iter().find(|(name, _)| *name == const_str) {
            return Err(Error::new(
                field.span(),
                format!(
                    "filter key '{}' and '{}' both produce the constant {}",
                    key, other, const_str
                ),
            ));
        }
        seen_consts.push((const_str.clone(), key.clone()));

        let const_name = format_ident!("{}", const_str);
        key_constants.push(quote! {
            /// Filter key constant.
            pub const #const_name: &'static str = #key;
        });

        descriptors.push(quote! {
            ::filterkit::FieldDescriptor::new(
                #key,
                ::filterkit::FilterField::to_field(&self.#field_name),
            )
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#key_constants)*
        }

        impl #impl_generics ::filterkit::Filterable for #struct_name #ty_generics #where_clause {
            fn describe_fields(&self) -> ::std::vec::Vec<::filterkit::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }
        }
    };

    Ok(expanded)
}

/// Convert a key to SCREAMING_SNAKE_CASE.
///
/// Characters that cannot appear in an identifier become underscores.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c.is_alphanumeric() {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        } else {
            result.push('_');
            prev_was_lower = false;
        }
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    result
}

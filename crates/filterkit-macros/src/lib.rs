//! Proc macros for Filterkit.
//!
//! # Available Macros
//!
//! - [`Filterable`] - Describe a struct's fields so it can seed a filter
//!
//! # Examples
//!
//! For working examples, see `filterkit/tests/filterable_derive.rs`.

mod filterable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Filterable` trait for structs with named fields.
///
/// This macro generates an implementation of the `Filterable` trait from
/// `filterkit`. Every field is described through `filterkit::FilterField`,
/// so each field type must implement it unless the field is skipped.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `rename = "..."` | Use a custom key in the filter |
/// | `skip` | Leave this field out of the filter |
///
/// Without `rename`, the key is the field name.
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Key constants (e.g., `Search::NAME`, `Search::CAP_NAME`)
/// 2. Implementation of `Filterable::describe_fields()`
///
/// # Example
///
/// ```ignore
/// use filterkit::{Filterable, FilterBuilder};
///
/// #[derive(Filterable)]
/// struct Search {
///     name: String,
///
///     #[filter(rename = "capName")]
///     cap_name: String,
///
///     tags: Vec<String>,
///
///     #[filter(skip)]
///     cursor: Option<Cursor>,
/// }
///
/// let search = Search {
///     name: "a".into(),
///     cap_name: "".into(),
///     tags: vec!["x".into()],
///     cursor: None,
/// };
///
/// // Zero-valued fields are left out; sequences become `$in`.
/// let filter = FilterBuilder::new().from_record(&search).build();
/// assert_eq!(Search::CAP_NAME, "capName");
/// ```
#[proc_macro_derive(Filterable, attributes(filter))]
pub fn filterable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    filterable::filterable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

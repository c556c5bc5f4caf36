//! Implementation of the `#[derive(Filterable)]` macro.
//!
//! This module generates the field descriptions and key constants a record
//! needs to seed a filter.

mod attrs;
mod derive;

pub use derive::filterable_derive_impl;

//! Filterkit - Fluent builder for document-store query filters.
//!
//! Filterkit builds the filter documents a document store's query engine
//! consumes. It never runs a query; the compiled [`Filter`] is inert data
//! handed to whatever executes it. It supports:
//!
//! - Typed condition views: strings, numbers, dates, identifiers
//! - Operators: equality, comparison, membership, patterns
//! - Implicit AND within a group, explicit OR across groups
//! - Seeding conditions from a record via `#[derive(Filterable)]`
//!
//! # Quick Start
//!
//! ```rust
//! use filterkit::FilterBuilder;
//! use serde_json::json;
//!
//! # fn main() -> filterkit::Result<()> {
//! let mut builder = FilterBuilder::new();
//! builder
//!     .string("name").like("^a")
//!     .number("age").between(18, 65)
//!     .or()
//!     .date("joined").gte_str("2024-01-01T00:00:00Z")?;
//!
//! let filter = builder.build();
//! assert_eq!(
//!     filter.to_json(),
//!     json!({ "$or": [
//!         {
//!             "name": { "$regex": { "$regularExpression": { "pattern": "^a", "options": "" } } },
//!             "age": { "$gte": 18, "$lte": 65 }
//!         },
//!         { "joined": { "$gte": { "$date": "2024-01-01T00:00:00Z" } } }
//!     ]})
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Composition Rules
//!
//! ```text
//! filter = group                         (one group)
//!        | { "$or": [group, group, ...] } (two or more groups)
//! group  = { field: { op: value, ... }, ... }
//! ```
//!
//! - Conditions on the same field in one group merge into one operator
//!   map; a repeated operator overwrites the earlier value.
//! - [`FilterBuilder::or`] seals the current group; on an empty group it
//!   does nothing.
//! - [`FilterBuilder::build`] compiles and resets the builder.
//!
//! # Views and Operators
//!
//! | View | Operators |
//! |------|-----------|
//! | `string` | `eq`, `ne`, `regex`/`like`, `not`/`not_like`, `is_in`, `not_in` |
//! | `number` | `eq`, `ne`, `lt`, `lte`, `gt`, `gte`, `between`, `is_in`, `not_in` |
//! | `date` | as `number`, plus `*_str` variants parsing text |
//! | `oid` | `eq` (hex text) |
//! | `any` | every [`Op`] |

mod builder;
mod condition;
mod config;
mod error;
mod filter;
mod object_id;
mod op;
mod record;
mod value;
mod views;

// Re-export public API
pub use builder::FilterBuilder;
pub use condition::Condition;
pub use config::{DateFormat, FilterConfig, DEFAULT_ID_KEY};
pub use error::{FilterError, Result};
pub use filter::Filter;
pub use object_id::ObjectId;
pub use op::{Op, OR_TAG};
pub use record::{produce, FieldDescriptor, FieldValue, FilterField, Filterable};
pub use value::{Document, FilterValue, Number, Pattern};
pub use views::{AnyCond, DateCond, NumCond, OidCond, StrCond};

// Derive macro (requires `features = ["derive"]`, on by default)
#[cfg(feature = "derive")]
pub use filterkit_macros::Filterable;

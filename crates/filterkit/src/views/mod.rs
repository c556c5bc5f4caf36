//! Typed condition views.
//!
//! Each view wraps a [`Condition`](crate::Condition) and exposes only the
//! operators that make sense for its value kind. Views are single-use:
//! every operator call consumes the view and hands back the builder so
//! chains can move on to the next field.

mod any;
mod date;
mod number;
mod oid;
mod string;

pub use any::AnyCond;
pub use date::DateCond;
pub use number::NumCond;
pub use oid::OidCond;
pub use string::StrCond;

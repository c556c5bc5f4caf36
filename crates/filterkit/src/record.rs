//! Turning records into equality and membership conditions.
//!
//! A record describes its fields through [`Filterable`]; [`produce`] keeps
//! the non-zero ones and hands `(key, value)` pairs to
//! [`FilterBuilder::from_record`](crate::FilterBuilder::from_record).

use chrono::{DateTime, Utc};
use log::trace;

use crate::object_id::ObjectId;
use crate::value::FilterValue;

/// Trait for records that can seed a filter.
///
/// This trait is typically derived using `#[derive(Filterable)]`, but can
/// also be implemented manually.
///
/// # Derive Usage
///
/// ```
/// use filterkit::{Filterable, FilterBuilder};
///
/// #[derive(Filterable)]
/// struct Search {
///     name: String,
///     #[filter(rename = "capName")]
///     cap_name: String,
///     tags: Vec<String>,
///     #[filter(skip)]
///     page: u32,
/// }
///
/// let search = Search {
///     name: "a".into(),
///     cap_name: String::new(),
///     tags: vec!["x".into()],
///     page: 2,
/// };
///
/// let filter = FilterBuilder::new().from_record(&search).build();
/// assert_eq!(
///     filter.to_json(),
///     serde_json::json!({ "name": { "$eq": "a" }, "tags": { "$in": ["x"] } })
/// );
/// assert_eq!(Search::CAP_NAME, "capName");
/// ```
///
/// # Manual Implementation
///
/// ```
/// use filterkit::{FieldDescriptor, FieldValue, FilterField, Filterable};
///
/// struct Search {
///     name: String,
///     min_age: u8,
/// }
///
/// impl Filterable for Search {
///     fn describe_fields(&self) -> Vec<FieldDescriptor> {
///         vec![
///             FieldDescriptor::new("name", self.name.to_field()),
///             FieldDescriptor::new("minAge", self.min_age.to_field()),
///         ]
///     }
/// }
/// ```
pub trait Filterable {
    /// Describes every field that may contribute a condition.
    ///
    /// Zero values and unsupported kinds are filtered out by [`produce`],
    /// so implementations can describe fields unconditionally.
    fn describe_fields(&self) -> Vec<FieldDescriptor>;
}

/// One described field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Output key.
    pub key: String,
    /// The field's value and kind.
    pub value: FieldValue,
}

impl FieldDescriptor {
    /// Creates a new descriptor.
    pub fn new(key: impl Into<String>, value: FieldValue) -> Self {
        FieldDescriptor {
            key: key.into(),
            value,
        }
    }
}

/// A field value, classified by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A single value, compiled to `$eq`.
    Scalar(FilterValue),
    /// A sequence, compiled to `$in`.
    Sequence(Vec<FilterValue>),
    /// A kind that cannot become a condition. Always skipped.
    Unsupported,
}

/// Conversion from a field type to a [`FieldValue`].
///
/// Implemented for strings, integer and float primitives, `bool`,
/// `DateTime<Utc>`, [`ObjectId`], and `Option`/`Vec`/slices of those. Types
/// without an impl must be marked `#[filter(skip)]` when deriving, or
/// implement this trait returning [`FieldValue::Unsupported`].
pub trait FilterField {
    /// Classifies and converts the value.
    fn to_field(&self) -> FieldValue;
}

impl<T: FilterField + ?Sized> FilterField for &T {
    fn to_field(&self) -> FieldValue {
        (**self).to_field()
    }
}

impl<T: FilterField + ?Sized> FilterField for Box<T> {
    fn to_field(&self) -> FieldValue {
        (**self).to_field()
    }
}

macro_rules! scalar_field {
    ($($t:ty),*) => {
        $(
            impl FilterField for $t {
                fn to_field(&self) -> FieldValue {
                    FieldValue::Scalar(FilterValue::from(self.clone()))
                }
            }
        )*
    };
}

scalar_field!(
    String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, ObjectId,
    DateTime<Utc>
);

impl FilterField for str {
    fn to_field(&self) -> FieldValue {
        FieldValue::Scalar(FilterValue::from(self))
    }
}

impl<T: FilterField> FilterField for Option<T> {
    fn to_field(&self) -> FieldValue {
        match self {
            Some(value) => value.to_field(),
            None => FieldValue::Scalar(FilterValue::Null),
        }
    }
}

impl<T: FilterField> FilterField for [T] {
    fn to_field(&self) -> FieldValue {
        let items = self
            .iter()
            .filter_map(|item| match item.to_field() {
                FieldValue::Scalar(value) => Some(value),
                FieldValue::Sequence(values) => Some(FilterValue::Array(values)),
                FieldValue::Unsupported => None,
            })
            .collect();
        FieldValue::Sequence(items)
    }
}

impl<T: FilterField> FilterField for Vec<T> {
    fn to_field(&self) -> FieldValue {
        self.as_slice().to_field()
    }
}

/// Produces the `(key, value)` pairs a record contributes to a filter.
///
/// - zero scalars (see [`FilterValue::is_zero`]) are skipped
/// - empty sequences are skipped; others become [`FilterValue::Array`]
/// - [`FieldValue::Unsupported`] fields are skipped
///
/// Pairs keep the order the record describes them in.
pub fn produce<T: Filterable + ?Sized>(record: &T) -> Vec<(String, FilterValue)> {
    record
        .describe_fields()
        .into_iter()
        .filter_map(|field| match field.value {
            FieldValue::Scalar(value) if !value.is_zero() => Some((field.key, value)),
            FieldValue::Sequence(items) if !items.is_empty() => {
                Some((field.key, FilterValue::Array(items)))
            }
            _ => {
                trace!("skipping field {}", field.key);
                None
            }
        })
        .collect()
}

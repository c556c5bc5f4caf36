//! Filter document values.
//!
//! [`FilterValue`] is the recursive value a compiled filter is made of:
//! scalars, sequences and documents keyed by field name or operator tag.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::object_id::ObjectId;

/// An insertion-ordered mapping from keys to values.
///
/// Field groups and operator maps are both documents.
pub type Document = IndexMap<String, FilterValue>;

/// A single value inside a filter document.
///
/// # Example
///
/// ```
/// use filterkit::{FilterValue, Number};
///
/// let v: FilterValue = 18u8.into();
/// assert_eq!(v, FilterValue::Number(Number::U64(18)));
///
/// let v: FilterValue = vec!["a", "b"].into();
/// assert!(v.is_array());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(String),
    /// UTC timestamp.
    DateTime(DateTime<Utc>),
    /// Native document identifier.
    ObjectId(ObjectId),
    /// Pattern with match options.
    Pattern(Pattern),
    /// Ordered sequence of values.
    Array(Vec<FilterValue>),
    /// Nested document.
    Document(Document),
}

impl FilterValue {
    /// Returns `true` if this is a `Document` value.
    pub fn is_document(&self) -> bool {
        matches!(self, FilterValue::Document(_))
    }

    /// Returns `true` if this is an `Array` value.
    pub fn is_array(&self) -> bool {
        matches!(self, FilterValue::Array(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrows the nested document, if present.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            FilterValue::Document(doc) => Some(doc),
            _ => None,
        }
    }

    /// Borrows the sequence, if present.
    pub fn as_array(&self) -> Option<&[FilterValue]> {
        match self {
            FilterValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` for the zero value of each kind.
    ///
    /// Zero values are: `Null`, `false`, numeric zero, the empty string,
    /// the Unix epoch, the all-zero identifier, an empty pattern, and empty
    /// sequences or documents.
    pub fn is_zero(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Bool(b) => !*b,
            FilterValue::Number(n) => n.is_zero(),
            FilterValue::String(s) => s.is_empty(),
            FilterValue::DateTime(dt) => dt.timestamp() == 0 && dt.timestamp_subsec_nanos() == 0,
            FilterValue::ObjectId(id) => id.is_zero(),
            FilterValue::Pattern(p) => p.pattern.is_empty() && p.options.is_empty(),
            FilterValue::Array(items) => items.is_empty(),
            FilterValue::Document(doc) => doc.is_empty(),
        }
    }

    /// Renders this value as extended JSON.
    pub fn to_json(&self) -> serde_json::Value {
        // Every variant serializes to plain JSON, so this cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterValue::Null => serializer.serialize_unit(),
            FilterValue::Bool(b) => serializer.serialize_bool(*b),
            FilterValue::Number(Number::I64(n)) => serializer.serialize_i64(*n),
            FilterValue::Number(Number::U64(n)) => serializer.serialize_u64(*n),
            FilterValue::Number(Number::F64(n)) if n.is_finite() => serializer.serialize_f64(*n),
            FilterValue::Number(Number::F64(n)) => {
                // Plain JSON has no NaN or infinities.
                let text = if n.is_nan() {
                    "NaN"
                } else if n.is_sign_positive() {
                    "Infinity"
                } else {
                    "-Infinity"
                };
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$numberDouble", text)?;
                map.end()
            }
            FilterValue::String(s) => serializer.serialize_str(s),
            FilterValue::DateTime(dt) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$date", &dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))?;
                map.end()
            }
            FilterValue::ObjectId(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$oid", &id.to_hex())?;
                map.end()
            }
            FilterValue::Pattern(p) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$regularExpression", p)?;
                map.end()
            }
            FilterValue::Array(items) => items.serialize(serializer),
            FilterValue::Document(doc) => doc.serialize(serializer),
        }
    }
}

/// A pattern plus its match options, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub struct Pattern {
    /// The pattern text.
    pub pattern: String,
    /// Option flags, empty by default.
    pub options: String,
}

impl Pattern {
    /// Creates a pattern with no options.
    pub fn new(pattern: impl Into<String>) -> Self {
        Pattern {
            pattern: pattern.into(),
            options: String::new(),
        }
    }

    /// Creates a pattern with the given options.
    pub fn with_options(pattern: impl Into<String>, options: impl Into<String>) -> Self {
        Pattern {
            pattern: pattern.into(),
            options: options.into(),
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers keep the kind they were created with so the rendered document
/// carries the caller's integer or float type:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Returns `true` if the number equals zero.
    pub fn is_zero(self) -> bool {
        match self {
            Number::I64(n) => n == 0,
            Number::U64(n) => n == 0,
            Number::F64(n) => n == 0.0,
        }
    }
}

macro_rules! number_from {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$t> for FilterValue {
                fn from(n: $t) -> Self {
                    FilterValue::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(I64, i64: i8, i16, i32, i64, isize);
number_from!(U64, u64: u8, u16, u32, u64, usize);
number_from!(F64, f64: f32, f64);

impl From<Number> for FilterValue {
    fn from(n: Number) -> Self {
        FilterValue::Number(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::String(s)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::String(s.to_string())
    }
}

impl From<&String> for FilterValue {
    fn from(s: &String) -> Self {
        FilterValue::String(s.clone())
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FilterValue::DateTime(dt)
    }
}

impl From<ObjectId> for FilterValue {
    fn from(id: ObjectId) -> Self {
        FilterValue::ObjectId(id)
    }
}

impl From<Pattern> for FilterValue {
    fn from(p: Pattern) -> Self {
        FilterValue::Pattern(p)
    }
}

impl From<Document> for FilterValue {
    fn from(doc: Document) -> Self {
        FilterValue::Document(doc)
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(items: Vec<T>) -> Self {
        FilterValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn number_conversions() {
        assert_eq!(Number::from(42i32), Number::I64(42));
        assert_eq!(Number::from(42u32), Number::U64(42));
        assert_eq!(Number::from(42.5f64), Number::F64(42.5));
        assert_eq!(FilterValue::from(7usize), FilterValue::Number(Number::U64(7)));
    }

    #[test]
    fn zero_values() {
        assert!(FilterValue::Null.is_zero());
        assert!(FilterValue::from("").is_zero());
        assert!(FilterValue::from(0i64).is_zero());
        assert!(FilterValue::from(0.0f64).is_zero());
        assert!(FilterValue::from(false).is_zero());
        assert!(FilterValue::from(Vec::<String>::new()).is_zero());
        assert!(FilterValue::from(Utc.timestamp_opt(0, 0).unwrap()).is_zero());
        assert!(FilterValue::from(ObjectId::default()).is_zero());

        assert!(!FilterValue::from("a").is_zero());
        assert!(!FilterValue::from(-1i32).is_zero());
        assert!(!FilterValue::from(true).is_zero());
        assert!(!FilterValue::from(vec![0u8]).is_zero());
    }

    #[test]
    fn option_into_value() {
        assert_eq!(FilterValue::from(None::<i32>), FilterValue::Null);
        assert_eq!(FilterValue::from(Some("x")), FilterValue::from("x"));
    }

    #[test]
    fn scalars_render_as_plain_json() {
        assert_eq!(FilterValue::from("a").to_json(), json!("a"));
        assert_eq!(FilterValue::from(-3i32).to_json(), json!(-3));
        assert_eq!(FilterValue::from(3u64).to_json(), json!(3));
        assert_eq!(FilterValue::from(1.5f64).to_json(), json!(1.5));
        assert_eq!(FilterValue::from(true).to_json(), json!(true));
        assert_eq!(FilterValue::Null.to_json(), json!(null));
        assert_eq!(FilterValue::from(vec![1i32, 2]).to_json(), json!([1, 2]));
    }

    #[test]
    fn extended_types_render_tagged() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 29, 3, 4, 5).unwrap();
        assert_eq!(
            FilterValue::from(dt).to_json(),
            json!({"$date": "2024-01-29T03:04:05Z"})
        );

        let id = ObjectId::parse_str("5f1a2b3c4d5e6f7a8b9c0d1e").unwrap();
        assert_eq!(
            FilterValue::from(id).to_json(),
            json!({"$oid": "5f1a2b3c4d5e6f7a8b9c0d1e"})
        );

        assert_eq!(
            FilterValue::from(Pattern::with_options("^a", "i")).to_json(),
            json!({"$regularExpression": {"pattern": "^a", "options": "i"}})
        );
    }

    #[test]
    fn non_finite_floats_render_tagged() {
        assert_eq!(
            FilterValue::from(f64::NAN).to_json(),
            json!({"$numberDouble": "NaN"})
        );
        assert_eq!(
            FilterValue::from(f64::INFINITY).to_json(),
            json!({"$numberDouble": "Infinity"})
        );
        assert_eq!(
            FilterValue::from(f32::NEG_INFINITY).to_json(),
            json!({"$numberDouble": "-Infinity"})
        );
    }

    #[test]
    fn document_keeps_insertion_order() {
        let mut doc = Document::new();
        doc.insert("z".to_string(), 1i32.into());
        doc.insert("a".to_string(), 2i32.into());
        let rendered = serde_json::to_string(&FilterValue::Document(doc)).unwrap();
        assert_eq!(rendered, r#"{"z":1,"a":2}"#);
    }
}

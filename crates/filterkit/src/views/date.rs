use chrono::{DateTime, Utc};

use crate::builder::FilterBuilder;
use crate::condition::Condition;
use crate::config::DateFormat;
use crate::error::Result;
use crate::op::Op;
use crate::value::FilterValue;

/// Date condition view.
///
/// Offers the numeric operator surface over UTC timestamps, plus `*_str`
/// variants that parse text with the view's format. The format defaults to
/// the builder's configured one and can be replaced for a single call with
/// [`with_format`](DateCond::with_format).
///
/// Text that does not parse is rejected at the offending call and nothing
/// is written to the builder.
///
/// # Example
///
/// ```
/// use filterkit::FilterBuilder;
/// use serde_json::json;
///
/// # fn main() -> filterkit::Result<()> {
/// let mut builder = FilterBuilder::new();
/// builder
///     .date("created")
///     .with_format("%Y-%m-%d")
///     .between_str("2024-01-01", "2024-01-31")?;
///
/// assert_eq!(
///     builder.build().to_json(),
///     json!({ "created": {
///         "$gte": { "$date": "2024-01-01T00:00:00Z" },
///         "$lte": { "$date": "2024-01-31T00:00:00Z" }
///     }})
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DateCond<'a> {
    cond: Condition<'a>,
    format: DateFormat,
}

impl<'a> DateCond<'a> {
    pub(crate) fn new(cond: Condition<'a>, format: DateFormat) -> Self {
        DateCond { cond, format }
    }

    /// Uses `format` for the text values passed to this view.
    pub fn with_format(mut self, format: impl Into<DateFormat>) -> Self {
        self.format = format.into();
        self
    }

    /// The format text values are parsed with.
    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    fn apply(mut self, op: Op, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.cond.set(op, val);
        self.cond.finish()
    }

    fn apply_str(self, op: Op, val: &str) -> Result<&'a mut FilterBuilder> {
        let parsed = self.format.parse(val)?;
        Ok(self.apply(op, parsed))
    }

    /// Adds `$eq: val`.
    pub fn eq(self, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.apply(Op::Eq, val)
    }

    /// Parses `val` and adds `$eq`.
    pub fn eq_str(self, val: &str) -> Result<&'a mut FilterBuilder> {
        self.apply_str(Op::Eq, val)
    }

    /// Adds `$ne: val`.
    pub fn ne(self, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.apply(Op::Ne, val)
    }

    /// Parses `val` and adds `$ne`.
    pub fn ne_str(self, val: &str) -> Result<&'a mut FilterBuilder> {
        self.apply_str(Op::Ne, val)
    }

    /// Adds `$lt: val`.
    pub fn lt(self, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.apply(Op::Lt, val)
    }

    /// Parses `val` and adds `$lt`.
    pub fn lt_str(self, val: &str) -> Result<&'a mut FilterBuilder> {
        self.apply_str(Op::Lt, val)
    }

    /// Adds `$lte: val`.
    pub fn lte(self, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.apply(Op::Lte, val)
    }

    /// Parses `val` and adds `$lte`.
    pub fn lte_str(self, val: &str) -> Result<&'a mut FilterBuilder> {
        self.apply_str(Op::Lte, val)
    }

    /// Adds `$gt: val`.
    pub fn gt(self, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.apply(Op::Gt, val)
    }

    /// Parses `val` and adds `$gt`.
    pub fn gt_str(self, val: &str) -> Result<&'a mut FilterBuilder> {
        self.apply_str(Op::Gt, val)
    }

    /// Adds `$gte: val`.
    pub fn gte(self, val: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.apply(Op::Gte, val)
    }

    /// Parses `val` and adds `$gte`.
    pub fn gte_str(self, val: &str) -> Result<&'a mut FilterBuilder> {
        self.apply_str(Op::Gte, val)
    }

    /// Inclusive range: `$gte: min` followed by `$lte: max`.
    pub fn between(mut self, min: DateTime<Utc>, max: DateTime<Utc>) -> &'a mut FilterBuilder {
        self.cond.set(Op::Gte, min);
        self.cond.set(Op::Lte, max);
        self.cond.finish()
    }

    /// Parses both bounds, then adds the inclusive range.
    ///
    /// Neither bound is written unless both parse.
    pub fn between_str(self, min: &str, max: &str) -> Result<&'a mut FilterBuilder> {
        let min = self.format.parse(min)?;
        let max = self.format.parse(max)?;
        Ok(self.between(min, max))
    }

    /// Adds `$in: [vals...]`.
    pub fn is_in<I>(mut self, vals: I) -> &'a mut FilterBuilder
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        let vals: Vec<FilterValue> = vals.into_iter().map(FilterValue::DateTime).collect();
        self.cond.set(Op::In, vals);
        self.cond.finish()
    }
}

use crate::builder::FilterBuilder;
use crate::condition::Condition;
use crate::op::Op;
use crate::value::{FilterValue, Pattern};

/// String condition view.
///
/// Pattern text and options are passed through verbatim; the dialect is
/// the query engine's.
///
/// # Example
///
/// ```
/// use filterkit::FilterBuilder;
/// use serde_json::json;
///
/// let filter = FilterBuilder::new()
///     .string("name").like("^a")
///     .string("tag").is_in(["x", "y"])
///     .build();
///
/// assert_eq!(
///     filter.to_json(),
///     json!({
///         "name": { "$regex": { "$regularExpression": { "pattern": "^a", "options": "" } } },
///         "tag": { "$in": ["x", "y"] }
///     })
/// );
/// ```
#[derive(Debug)]
pub struct StrCond<'a> {
    cond: Condition<'a>,
}

impl<'a> StrCond<'a> {
    pub(crate) fn new(cond: Condition<'a>) -> Self {
        StrCond { cond }
    }

    fn apply(mut self, op: Op, value: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.cond.set(op, value);
        self.cond.finish()
    }

    /// Adds `$eq: val`.
    pub fn eq(self, val: impl Into<String>) -> &'a mut FilterBuilder {
        self.apply(Op::Eq, val.into())
    }

    /// Adds `$ne: val`.
    pub fn ne(self, val: impl Into<String>) -> &'a mut FilterBuilder {
        self.apply(Op::Ne, val.into())
    }

    /// Adds `$regex` with empty options.
    pub fn regex(self, pattern: impl Into<String>) -> &'a mut FilterBuilder {
        self.apply(Op::Regex, Pattern::new(pattern))
    }

    /// Adds `$regex` with the given options.
    pub fn regex_with_options(
        self,
        pattern: impl Into<String>,
        options: impl Into<String>,
    ) -> &'a mut FilterBuilder {
        self.apply(Op::Regex, Pattern::with_options(pattern, options))
    }

    /// Adds `$not` with a pattern and empty options.
    ///
    /// This negates the pattern match, not the clause.
    pub fn not(self, pattern: impl Into<String>) -> &'a mut FilterBuilder {
        self.apply(Op::Not, Pattern::new(pattern))
    }

    /// Adds `$not` with a pattern and the given options.
    pub fn not_with_options(
        self,
        pattern: impl Into<String>,
        options: impl Into<String>,
    ) -> &'a mut FilterBuilder {
        self.apply(Op::Not, Pattern::with_options(pattern, options))
    }

    /// Alias for [`regex`](StrCond::regex).
    pub fn like(self, pattern: impl Into<String>) -> &'a mut FilterBuilder {
        self.regex(pattern)
    }

    /// Alias for [`not`](StrCond::not).
    pub fn not_like(self, pattern: impl Into<String>) -> &'a mut FilterBuilder {
        self.not(pattern)
    }

    /// Adds `$in: [vals...]`.
    pub fn is_in<I>(self, vals: I) -> &'a mut FilterBuilder
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.apply(Op::In, collect_strings(vals))
    }

    /// Adds `$nin: [vals...]`.
    pub fn not_in<I>(self, vals: I) -> &'a mut FilterBuilder
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.apply(Op::Nin, collect_strings(vals))
    }
}

fn collect_strings<I>(vals: I) -> FilterValue
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    FilterValue::Array(
        vals.into_iter()
            .map(|v| FilterValue::String(v.into()))
            .collect(),
    )
}

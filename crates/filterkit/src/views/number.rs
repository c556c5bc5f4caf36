use crate::builder::FilterBuilder;
use crate::condition::Condition;
use crate::op::Op;
use crate::value::FilterValue;

/// Numeric condition view.
///
/// Values are taken as anything convertible to [`FilterValue`]; the view
/// does not check that they are numbers, nor that `between` bounds are in
/// order. The query engine judges them when it evaluates the filter.
#[derive(Debug)]
pub struct NumCond<'a> {
    cond: Condition<'a>,
}

impl<'a> NumCond<'a> {
    pub(crate) fn new(cond: Condition<'a>) -> Self {
        NumCond { cond }
    }

    fn apply(mut self, op: Op, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.cond.set(op, val);
        self.cond.finish()
    }

    /// Adds `$eq: val`.
    pub fn eq(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.apply(Op::Eq, val)
    }

    /// Adds `$ne: val`.
    pub fn ne(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.apply(Op::Ne, val)
    }

    /// Adds `$lt: val`.
    pub fn lt(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.apply(Op::Lt, val)
    }

    /// Adds `$lte: val`.
    pub fn lte(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.apply(Op::Lte, val)
    }

    /// Adds `$gt: val`.
    pub fn gt(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.apply(Op::Gt, val)
    }

    /// Adds `$gte: val`.
    pub fn gte(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.apply(Op::Gte, val)
    }

    /// Inclusive range: `$gte: min` followed by `$lte: max`.
    pub fn between(
        mut self,
        min: impl Into<FilterValue>,
        max: impl Into<FilterValue>,
    ) -> &'a mut FilterBuilder {
        self.cond.set(Op::Gte, min);
        self.cond.set(Op::Lte, max);
        self.cond.finish()
    }

    /// Adds `$in: [vals...]`.
    pub fn is_in<I>(self, vals: I) -> &'a mut FilterBuilder
    where
        I: IntoIterator,
        I::Item: Into<FilterValue>,
    {
        let vals: Vec<FilterValue> = vals.into_iter().map(Into::into).collect();
        self.apply(Op::In, vals)
    }

    /// Adds `$nin: [vals...]`.
    pub fn not_in<I>(self, vals: I) -> &'a mut FilterBuilder
    where
        I: IntoIterator,
        I::Item: Into<FilterValue>,
    {
        let vals: Vec<FilterValue> = vals.into_iter().map(Into::into).collect();
        self.apply(Op::Nin, vals)
    }
}

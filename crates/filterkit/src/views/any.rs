use crate::builder::FilterBuilder;
use crate::condition::Condition;
use crate::op::Op;
use crate::value::{FilterValue, Pattern};

/// Untyped condition view exposing every operator.
///
/// Use this for values none of the typed views cover, such as booleans
/// or nested documents.
#[derive(Debug)]
pub struct AnyCond<'a> {
    cond: Condition<'a>,
}

impl<'a> AnyCond<'a> {
    pub(crate) fn new(cond: Condition<'a>) -> Self {
        AnyCond { cond }
    }

    /// Adds `op: val`.
    pub fn op(mut self, op: Op, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.cond.set(op, val);
        self.cond.finish()
    }

    /// Adds `$eq: val`.
    pub fn eq(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Eq, val)
    }

    /// Adds `$ne: val`.
    pub fn ne(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Ne, val)
    }

    /// Adds `$gt: val`.
    pub fn gt(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Gt, val)
    }

    /// Adds `$gte: val`.
    pub fn gte(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Gte, val)
    }

    /// Adds `$lt: val`.
    pub fn lt(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Lt, val)
    }

    /// Adds `$lte: val`.
    pub fn lte(self, val: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Lte, val)
    }

    /// Adds `$in: val`.
    pub fn is_in(self, vals: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::In, vals)
    }

    /// Adds `$nin: val`.
    pub fn not_in(self, vals: impl Into<FilterValue>) -> &'a mut FilterBuilder {
        self.op(Op::Nin, vals)
    }

    /// Adds `$regex` with the given options.
    pub fn regex(
        self,
        pattern: impl Into<String>,
        options: impl Into<String>,
    ) -> &'a mut FilterBuilder {
        self.op(Op::Regex, Pattern::with_options(pattern, options))
    }

    /// Adds `$not` with the given pattern and options.
    pub fn not(
        self,
        pattern: impl Into<String>,
        options: impl Into<String>,
    ) -> &'a mut FilterBuilder {
        self.op(Op::Not, Pattern::with_options(pattern, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn untyped_values() {
        let filter = FilterBuilder::new()
            .any("done")
            .eq(true)
            .any("tags")
            .is_in(vec!["a", "b"])
            .any("score")
            .op(Op::Gte, 1.5)
            .build();
        assert_eq!(
            filter.to_json(),
            json!({
                "done": { "$eq": true },
                "tags": { "$in": ["a", "b"] },
                "score": { "$gte": 1.5 }
            })
        );
    }

    #[test]
    fn every_operator_reachable() {
        let mut builder = FilterBuilder::new();
        builder
            .any("f")
            .ne(1)
            .any("f")
            .gt(2)
            .any("f")
            .lt(3)
            .any("f")
            .lte(4)
            .any("f")
            .not_in(vec![5])
            .any("g")
            .regex("a", "i")
            .any("h")
            .not("b", "");
        let filter = builder.build();
        assert_eq!(
            filter.to_json(),
            json!({
                "f": { "$ne": 1, "$gt": 2, "$lt": 3, "$lte": 4, "$nin": [5] },
                "g": { "$regex": { "$regularExpression": { "pattern": "a", "options": "i" } } },
                "h": { "$not": { "$regularExpression": { "pattern": "b", "options": "" } } }
            })
        );
    }
}

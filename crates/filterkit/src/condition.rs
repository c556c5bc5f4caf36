//! Per-field conditions.
//!
//! A [`Condition`] collects the operator entries for one field and folds
//! them into the builder's current group after every write.

use indexmap::IndexMap;
use log::trace;

use crate::builder::FilterBuilder;
use crate::op::Op;
use crate::value::{Document, FilterValue};

/// The operator entries for one field.
///
/// A condition holds at most one value per [`Op`]; setting an operator
/// again overwrites it. Every write is merged into the current group under
/// the condition's key:
///
/// - if the group has no operator map for the key, the condition's map is
///   inserted whole
/// - otherwise each entry is copied into the existing map, overwriting on
///   operator collision
///
/// Two conditions on the same field therefore compose: `age >= 10` and a
/// later `age <= 20` end up in one `{ "$gte": 10, "$lte": 20 }` entry.
///
/// # Example
///
/// ```
/// use filterkit::{FilterBuilder, Op};
///
/// let mut builder = FilterBuilder::new();
/// let mut cond = builder.condition("age");
/// cond.set(Op::Gte, 10);
/// cond.set(Op::Lte, 20);
///
/// let filter = builder.build();
/// assert_eq!(
///     filter.to_json(),
///     serde_json::json!({ "age": { "$gte": 10, "$lte": 20 } })
/// );
/// ```
#[derive(Debug)]
pub struct Condition<'a> {
    key: String,
    ops: IndexMap<Op, FilterValue>,
    builder: &'a mut FilterBuilder,
}

impl<'a> Condition<'a> {
    pub(crate) fn new(key: impl Into<String>, builder: &'a mut FilterBuilder) -> Self {
        Condition {
            key: key.into(),
            ops: IndexMap::new(),
            builder,
        }
    }

    /// The field key this condition writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The operator entries written through this condition so far.
    pub fn ops(&self) -> &IndexMap<Op, FilterValue> {
        &self.ops
    }

    /// Sets `op` to `value` and merges the result into the current group.
    pub fn set(&mut self, op: Op, value: impl Into<FilterValue>) -> &mut Self {
        let value = value.into();
        trace!("{} {} {:?}", self.key, op, value);
        self.ops.insert(op, value);
        self.merge();
        self
    }

    /// Releases the condition, handing back the builder it writes to.
    pub fn finish(self) -> &'a mut FilterBuilder {
        self.builder
    }

    fn merge(&mut self) {
        let group = self.builder.current_group_mut();
        if let Some(FilterValue::Document(existing)) = group.get_mut(&self.key) {
            for (op, value) in &self.ops {
                existing.insert(op.as_str().to_string(), value.clone());
            }
            return;
        }

        // Absent, or a raw non-document value: the operator map replaces it.
        let doc: Document = self
            .ops
            .iter()
            .map(|(op, value)| (op.as_str().to_string(), value.clone()))
            .collect();
        group.insert(self.key.clone(), FilterValue::Document(doc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_inserts_operator_map() {
        let mut builder = FilterBuilder::new();
        builder.condition("name").set(Op::Eq, "a");
        assert_eq!(builder.build().to_json(), json!({ "name": { "$eq": "a" } }));
    }

    #[test]
    fn same_operator_overwrites_within_condition() {
        let mut builder = FilterBuilder::new();
        let mut cond = builder.condition("name");
        cond.set(Op::Eq, "a").set(Op::Eq, "b");
        assert_eq!(cond.ops().len(), 1);
        assert_eq!(builder.build().to_json(), json!({ "name": { "$eq": "b" } }));
    }

    #[test]
    fn separate_conditions_union_into_one_entry() {
        let mut builder = FilterBuilder::new();
        builder.condition("name").set(Op::Eq, "a");
        builder.condition("name").set(Op::Ne, "b");
        assert_eq!(
            builder.build().to_json(),
            json!({ "name": { "$eq": "a", "$ne": "b" } })
        );
    }

    #[test]
    fn condition_replaces_raw_scalar() {
        let mut builder = FilterBuilder::new();
        builder.raw("age", 3);
        builder.condition("age").set(Op::Gt, 1);
        assert_eq!(builder.build().to_json(), json!({ "age": { "$gt": 1 } }));
    }

    #[test]
    fn condition_unions_into_raw_document() {
        let mut raw = Document::new();
        raw.insert("$exists".to_string(), true.into());

        let mut builder = FilterBuilder::new();
        builder.raw("age", raw);
        builder.condition("age").set(Op::Gt, 1);
        assert_eq!(
            builder.build().to_json(),
            json!({ "age": { "$exists": true, "$gt": 1 } })
        );
    }

    #[test]
    fn finish_returns_builder() {
        let mut builder = FilterBuilder::new();
        let mut cond = builder.condition("x");
        assert_eq!(cond.key(), "x");
        cond.set(Op::Lt, 5);
        let builder = cond.finish();
        assert!(!builder.is_empty());
    }
}

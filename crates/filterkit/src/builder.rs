//! Filter accumulation and compilation.
//!
//! The [`FilterBuilder`] owns the accumulation state: the current group of
//! field conditions plus the groups already sealed by [`FilterBuilder::or`].

use log::debug;

use crate::condition::Condition;
use crate::config::{DateFormat, FilterConfig};
use crate::filter::Filter;
use crate::op::{Op, OR_TAG};
use crate::record::{self, Filterable};
use crate::value::{Document, FilterValue};
use crate::views::{AnyCond, DateCond, NumCond, OidCond, StrCond};

/// A fluent builder for filter documents.
///
/// Conditions written without an intervening [`or`](FilterBuilder::or)
/// land in the same group and are combined with an implicit AND. Each call
/// to `or` seals the current group as one alternative. Compilation yields
/// the single group directly, or `{ "$or": [group, ...] }` when there are
/// two or more.
///
/// # Example
///
/// ```
/// use filterkit::FilterBuilder;
/// use serde_json::json;
///
/// let filter = FilterBuilder::new()
///     .string("name").eq("a")
///     .number("age").gte(18)
///     .or()
///     .string("name").eq("b")
///     .build();
///
/// assert_eq!(
///     filter.to_json(),
///     json!({ "$or": [
///         { "name": { "$eq": "a" }, "age": { "$gte": 18 } },
///         { "name": { "$eq": "b" } }
///     ]})
/// );
/// ```
///
/// # Reuse
///
/// [`build`](FilterBuilder::build) resets the builder once the filter is
/// compiled, so the same instance can start an independent filter straight
/// away. [`reset`](FilterBuilder::reset) discards a half-built filter.
///
/// A builder is meant for single-owner sequential use; share it across
/// threads only behind external synchronization.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    config: FilterConfig,
    closed: Vec<Document>,
    current: Document,
}

impl FilterBuilder {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        FilterBuilder::default()
    }

    /// Creates an empty builder with the given configuration.
    pub fn with_config(config: FilterConfig) -> Self {
        FilterBuilder {
            config,
            ..FilterBuilder::default()
        }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    // ========================================================================
    // Conditions
    // ========================================================================

    /// Starts a fresh condition on `key`.
    ///
    /// A new condition is created on every call. Repeated conditions on the
    /// same key compose through the group merge rule described on
    /// [`Condition`].
    pub fn condition(&mut self, key: impl Into<String>) -> Condition<'_> {
        Condition::new(key, self)
    }

    /// Starts an untyped condition exposing every operator.
    pub fn any(&mut self, key: impl Into<String>) -> AnyCond<'_> {
        AnyCond::new(self.condition(key))
    }

    /// Starts a string condition.
    pub fn string(&mut self, key: impl Into<String>) -> StrCond<'_> {
        StrCond::new(self.condition(key))
    }

    /// Starts a numeric condition.
    pub fn number(&mut self, key: impl Into<String>) -> NumCond<'_> {
        NumCond::new(self.condition(key))
    }

    /// Starts a date condition using the configured date format.
    pub fn date(&mut self, key: impl Into<String>) -> DateCond<'_> {
        let format = self.config.date_format.clone();
        DateCond::new(self.condition(key), format)
    }

    /// Starts a date condition whose text values use `format`.
    pub fn date_with_format(
        &mut self,
        key: impl Into<String>,
        format: impl Into<DateFormat>,
    ) -> DateCond<'_> {
        DateCond::new(self.condition(key), format.into())
    }

    /// Starts an identifier condition on the configured id key.
    pub fn oid(&mut self) -> OidCond<'_> {
        let key = self.config.id_key.clone();
        OidCond::new(self.condition(key))
    }

    /// Starts an identifier condition on an explicit key.
    pub fn oid_at(&mut self, key: impl Into<String>) -> OidCond<'_> {
        OidCond::new(self.condition(key))
    }

    /// Writes `value` directly under `key` in the current group.
    ///
    /// This bypasses the operator structure entirely and replaces whatever
    /// the key held before.
    pub fn raw(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> &mut Self {
        self.current.insert(key.into(), value.into());
        self
    }

    /// Adds equality and membership conditions for a record's non-zero
    /// fields.
    ///
    /// Sequence fields become `$in` conditions; every other field becomes
    /// `$eq`.
    pub fn from_record<T: Filterable + ?Sized>(&mut self, record: &T) -> &mut Self {
        for (key, value) in record::produce(record) {
            let op = if value.is_array() { Op::In } else { Op::Eq };
            self.condition(key).set(op, value);
        }
        self
    }

    // ========================================================================
    // Groups
    // ========================================================================

    /// Seals the current group as one alternative and starts a new one.
    ///
    /// Does nothing when the current group is empty, so repeated calls never
    /// produce empty alternatives.
    pub fn or(&mut self) -> &mut Self {
        if self.current.is_empty() {
            return self;
        }
        self.fold_current();
        debug!("sealed group {}", self.closed.len());
        self
    }

    /// Removes `key` from the current group.
    ///
    /// Absent keys are ignored.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.current.shift_remove(key).is_some() {
            debug!("removed {} from current group", key);
        }
        self
    }

    /// Removes `key` from the current group and every sealed group.
    ///
    /// Sealed groups left empty are dropped; an empty alternative would
    /// match every document.
    pub fn remove_all(&mut self, key: &str) -> &mut Self {
        self.remove(key);
        for group in &mut self.closed {
            group.shift_remove(key);
        }
        self.closed.retain(|group| !group.is_empty());
        debug!("removed {} from all groups", key);
        self
    }

    /// Clears every group, returning the builder to its initial state.
    ///
    /// The configuration is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.closed.clear();
        self.current.clear();
        debug!("builder reset");
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Compiles the accumulated groups into a filter and resets the builder.
    ///
    /// - no conditions: an empty filter
    /// - one group: that group
    /// - two or more groups: `{ "$or": [group, ...] }`
    pub fn build(&mut self) -> Filter {
        self.fold_current();
        let mut groups = std::mem::take(&mut self.closed);
        debug!("compiling {} group(s)", groups.len());

        let root = if groups.len() <= 1 {
            groups.pop().unwrap_or_default()
        } else {
            let alternatives = groups.into_iter().map(FilterValue::Document).collect();
            let mut root = Document::new();
            root.insert(OR_TAG.to_string(), FilterValue::Array(alternatives));
            root
        };

        self.reset();
        Filter::new(root)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` if no condition has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.current.is_empty()
    }

    /// Returns the number of groups a build would currently produce.
    pub fn group_count(&self) -> usize {
        self.closed.len() + usize::from(!self.current.is_empty())
    }

    /// Returns the group conditions are currently written to.
    pub fn current_group(&self) -> &Document {
        &self.current
    }

    /// Returns the groups sealed by [`or`](FilterBuilder::or).
    pub fn closed_groups(&self) -> &[Document] {
        &self.closed
    }

    pub(crate) fn current_group_mut(&mut self) -> &mut Document {
        &mut self.current
    }

    fn fold_current(&mut self) {
        if !self.current.is_empty() {
            let group = std::mem::take(&mut self.current);
            self.closed.push(group);
        }
    }
}

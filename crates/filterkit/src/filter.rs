//! The compiled filter document.

use serde::{Serialize, Serializer};

use crate::value::{Document, FilterValue};

/// A compiled filter, ready to hand to a query executor.
///
/// The filter is inert data: it serializes to the engine's extended-JSON
/// filter shape and can be inspected as a [`Document`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    root: Document,
}

impl Filter {
    pub(crate) fn new(root: Document) -> Self {
        Filter { root }
    }

    /// Returns `true` if the filter has no conditions (matches everything).
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the top-level entry for `key`.
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.root.get(key)
    }

    /// Borrows the root document.
    pub fn as_document(&self) -> &Document {
        &self.root
    }

    /// Consumes the filter, returning the root document.
    pub fn into_document(self) -> Document {
        self.root
    }

    /// Renders the filter as extended JSON.
    pub fn to_json(&self) -> serde_json::Value {
        FilterValue::Document(self.root.clone()).to_json()
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl From<Filter> for FilterValue {
    fn from(filter: Filter) -> Self {
        FilterValue::Document(filter.root)
    }
}

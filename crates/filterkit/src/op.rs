//! Filter operators.
//!
//! The [`Op`] enum is the closed set of per-field operators a condition can
//! carry. Each operator renders to the tag the query engine expects.

/// Tag used to combine alternative groups at the root of a filter.
pub const OR_TAG: &str = "$or";

/// Comparison operator for a field condition.
///
/// Operators are grouped by the views that expose them:
/// - **Universal**: `Eq`, `Ne`
/// - **Ordering**: `Gt`, `Gte`, `Lt`, `Lte` (numeric and date views)
/// - **Membership**: `In`, `Nin`
/// - **Pattern**: `Regex`, `Not` (string view)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Value is one of the given set.
    In,
    /// Value is none of the given set.
    Nin,
    /// String matches a pattern.
    Regex,
    /// String does not match a pattern.
    ///
    /// This negates the pattern match only, not the whole clause.
    Not,
}

impl Op {
    /// Returns the wire tag for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "$eq",
            Op::Ne => "$ne",
            Op::Gt => "$gt",
            Op::Gte => "$gte",
            Op::Lt => "$lt",
            Op::Lte => "$lte",
            Op::In => "$in",
            Op::Nin => "$nin",
            Op::Regex => "$regex",
            Op::Not => "$not",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

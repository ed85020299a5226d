//! Attribute filtering.
//!
//! A directive's clause list compiles to an [`AttrFilter`]: a card matches it
//! when it satisfies *any* listed clause. Filters from different directives
//! combine into a [`Predicate`], which a card matches only when *every*
//! filter matches.

use super::{AttrValue, Attribute};
use crate::model::Card;

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// Text contains the value.
    Contains,
    /// Text does not contain the value.
    NotContains,
}

const ALL_OPS: &[FilterOp] = &[
    FilterOp::Eq,
    FilterOp::Ne,
    FilterOp::Lt,
    FilterOp::Le,
    FilterOp::Gt,
    FilterOp::Ge,
    FilterOp::Contains,
    FilterOp::NotContains,
];

impl FilterOp {
    pub fn token(self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
            FilterOp::Contains => "?",
            FilterOp::NotContains => "!?",
        }
    }

    /// Split the longest operator token off the start of `clause`.
    pub fn split_longest(clause: &str) -> Option<(FilterOp, &str)> {
        ALL_OPS
            .iter()
            .filter(|op| clause.starts_with(op.token()))
            .max_by_key(|op| op.token().len())
            .map(|op| (*op, &clause[op.token().len()..]))
    }

    fn compare_numbers(self, a: f64, b: f64) -> bool {
        match self {
            FilterOp::Eq => a == b,
            FilterOp::Ne => a != b,
            FilterOp::Lt => a < b,
            FilterOp::Le => a <= b,
            FilterOp::Gt => a > b,
            FilterOp::Ge => a >= b,
            FilterOp::Contains | FilterOp::NotContains => false,
        }
    }

    fn compare_text(self, a: &str, b: &str) -> bool {
        match self {
            FilterOp::Eq => a == b,
            FilterOp::Ne => a != b,
            FilterOp::Contains => a.contains(b),
            FilterOp::NotContains => !a.contains(b),
            FilterOp::Lt | FilterOp::Le | FilterOp::Gt | FilterOp::Ge => false,
        }
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// The right-hand side of a clause, already converted for the attribute's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    Number(f64),
    Text(String),
}

/// A single `(operator, value)` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub op: FilterOp,
    pub value: ClauseValue,
}

impl Clause {
    pub fn number(op: FilterOp, value: f64) -> Self {
        Self {
            op,
            value: ClauseValue::Number(value),
        }
    }

    pub fn text(op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            op,
            value: ClauseValue::Text(value.into()),
        }
    }

    /// Missing values never match, whatever the operator.
    pub fn matches(&self, value: &AttrValue) -> bool {
        match &self.value {
            ClauseValue::Number(want) => value
                .as_number()
                .is_some_and(|have| self.op.compare_numbers(have, *want)),
            ClauseValue::Text(want) => value
                .as_text()
                .is_some_and(|have| self.op.compare_text(&have, want)),
        }
    }
}

/// All clauses given for one attribute in one directive, OR-combined.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrFilter {
    pub attr: Attribute,
    pub clauses: Vec<Clause>,
}

impl AttrFilter {
    pub fn new(attr: Attribute, clauses: Vec<Clause>) -> Self {
        Self { attr, clauses }
    }

    /// True if the value satisfies at least one clause.
    pub fn matches(&self, value: &AttrValue) -> bool {
        self.clauses.iter().any(|clause| clause.matches(value))
    }
}

/// AND-combination of attribute filters.
///
/// An empty predicate accepts every card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    filters: Vec<AttrFilter>,
}

impl Predicate {
    pub fn new(filters: Vec<AttrFilter>) -> Self {
        Self { filters }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[AttrFilter] {
        &self.filters
    }

    /// Evaluate against values supplied by `read`.
    pub fn matches_with<F>(&self, read: F) -> bool
    where
        F: Fn(Attribute) -> AttrValue,
    {
        self.filters.iter().all(|filter| filter.matches(&read(filter.attr)))
    }

    pub fn matches(&self, card: &Card) -> bool {
        self.matches_with(|attr| card.get_attr(attr))
    }

    /// Split into (filters on `attr`, every other filter).
    pub fn partition(self, attr: Attribute) -> (Predicate, Predicate) {
        let (on, rest) = self.filters.into_iter().partition(|f| f.attr == attr);
        (Predicate::new(on), Predicate::new(rest))
    }
}

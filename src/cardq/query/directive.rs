//! Directive parsing.
//!
//! Each attribute flag on the command line decodes into one [`Directive`]:
//!
//! ```text
//! -[<aggregate>-]<attribute>[#][<op><value>[/<op><value>...]]
//! ```
//!
//! - `-cmc` selects and prints `cmc`
//! - `-cmc<2/>5` prints `cmc` and keeps cards with `cmc < 2` or `cmc > 5`
//! - `-type#=Instant` keeps instants without printing `type`
//! - `-total-usd` reports the summed price instead of printing rows

use tracing::debug;

use crate::attributes::{match_prefix, AttrFilter, Attribute, AttributeSpec, Clause, FilterOp};
use crate::error::{CardqError, Result};

const SUPPRESS_MARKER: char = '#';
const CLAUSE_SEPARATOR: char = '/';
const OPERATOR_CHARS: &[char] = &['=', '!', '<', '>', '?'];

/// A statistic computed over the whole filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Total,
    Max,
    Min,
    Avg,
    Median,
    Unique,
}

impl Aggregate {
    pub const ALL: &'static [Aggregate] = &[
        Aggregate::Total,
        Aggregate::Max,
        Aggregate::Min,
        Aggregate::Avg,
        Aggregate::Median,
        Aggregate::Unique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Aggregate::Total => "total",
            Aggregate::Max => "max",
            Aggregate::Min => "min",
            Aggregate::Avg => "avg",
            Aggregate::Median => "median",
            Aggregate::Unique => "unique",
        }
    }

    /// `unique` works on any attribute, everything else needs numbers.
    pub fn requires_numeric(self) -> bool {
        self != Aggregate::Unique
    }
}

impl std::fmt::Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The parsed form of one attribute flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub attr: Attribute,
    pub clauses: Vec<Clause>,
    pub suppress_print: bool,
    pub aggregate: Option<Aggregate>,
}

impl Directive {
    /// A plain "select and print" directive.
    pub fn select(attr: Attribute) -> Self {
        Self {
            attr,
            clauses: Vec::new(),
            suppress_print: false,
            aggregate: None,
        }
    }

    /// Whether the attribute shows up as a column of result rows.
    pub fn is_printed(&self) -> bool {
        !self.suppress_print && self.aggregate.is_none()
    }

    /// The OR-filter of this directive's clauses, if it has any.
    pub fn filter(&self) -> Option<AttrFilter> {
        if self.clauses.is_empty() {
            None
        } else {
            Some(AttrFilter::new(self.attr, self.clauses.clone()))
        }
    }

    /// Decode a single token such as `-cmc<2/>5`.
    pub fn parse(token: &str) -> Result<Self> {
        let body = token.strip_prefix('-').ok_or_else(|| unknown(token, token))?;
        let (aggregate, body) = split_aggregate(body);

        let (spec, tail) = match_prefix(body).ok_or_else(|| unknown(token, leading_word(body)))?;
        if tail.starts_with(|c: char| c.is_alphanumeric()) {
            return Err(unknown(token, leading_word(body)));
        }

        let (suppress_print, tail) = match tail.strip_prefix(SUPPRESS_MARKER) {
            Some(rest) => (true, rest),
            None => (false, tail),
        };

        let clauses = if tail.is_empty() {
            Vec::new()
        } else {
            tail.split(CLAUSE_SEPARATOR)
                .map(|clause| parse_clause(token, spec, clause))
                .collect::<Result<Vec<_>>>()?
        };

        if let Some(aggregate) = aggregate {
            if aggregate.requires_numeric() && !spec.kind.is_numeric() {
                return Err(CardqError::IncompatibleAggregate {
                    token: token.to_string(),
                    attribute: spec.name,
                    aggregate: aggregate.name(),
                });
            }
        }

        let directive = Directive {
            attr: spec.attribute,
            clauses,
            suppress_print,
            aggregate,
        };
        debug!(token, ?directive, "parsed directive");
        Ok(directive)
    }
}

/// Parse every token, failing on the first bad one. Order is preserved.
pub fn parse_directives<I: AsRef<str>>(tokens: &[I]) -> Result<Vec<Directive>> {
    tokens.iter().map(|t| Directive::parse(t.as_ref())).collect()
}

fn split_aggregate(body: &str) -> (Option<Aggregate>, &str) {
    Aggregate::ALL
        .iter()
        .find_map(|agg| {
            body.strip_prefix(agg.name())
                .and_then(|rest| rest.strip_prefix('-'))
                .map(|rest| (Some(*agg), rest))
        })
        .unwrap_or((None, body))
}

fn parse_clause(token: &str, spec: &AttributeSpec, clause: &str) -> Result<Clause> {
    let malformed = |reason: &str| CardqError::MalformedClause {
        token: token.to_string(),
        clause: clause.to_string(),
        reason: reason.to_string(),
    };

    if clause.is_empty() {
        return Err(malformed("empty clause"));
    }

    // `-cmc<2/cmc>5` is accepted as a spelled-out `-cmc<2/>5`.
    let body = clause
        .strip_prefix(spec.name)
        .filter(|rest| rest.starts_with(OPERATOR_CHARS))
        .unwrap_or(clause);

    let (op, value) = FilterOp::split_longest(body).ok_or_else(|| malformed("missing operator"))?;
    if !spec.kind.allows(op) {
        return Err(CardqError::InvalidOperator {
            token: token.to_string(),
            attribute: spec.name,
            operator: op.token().to_string(),
        });
    }
    if value.is_empty() {
        return Err(malformed("missing value"));
    }

    if spec.kind.is_numeric() {
        let number = parse_number(value)
            .ok_or_else(|| malformed(&format!("'{}' is not a number", value)))?;
        Ok(Clause::number(op, number))
    } else {
        Ok(Clause::text(op, value))
    }
}

/// Plain decimals only: digits with an optional fraction after a single
/// `_` or `.` (`0_5`). Signs, exponents and bare fractions are rejected.
fn parse_number(value: &str) -> Option<f64> {
    let (whole, fraction) = match value.split_once(|c: char| c == '_' || c == '.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !fraction.map_or(true, is_digits) {
        return None;
    }
    value.replace('_', ".").parse::<f64>().ok()
}

fn leading_word(body: &str) -> &str {
    let end = body
        .find(|c: char| c == SUPPRESS_MARKER || c == CLAUSE_SEPARATOR || OPERATOR_CHARS.contains(&c))
        .unwrap_or(body.len());
    &body[..end]
}

fn unknown(token: &str, name: &str) -> CardqError {
    CardqError::UnknownAttribute {
        token: token.to_string(),
        name: name.to_string(),
    }
}

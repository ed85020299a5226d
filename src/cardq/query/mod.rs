//! # Query Engine
//!
//! Turns attribute flags into a [`Query`] and evaluates it against a card
//! collection:
//!
//! ```text
//! tokens ──parse──▶ directives ──▶ predicate ──filter──▶ records
//!                                                          │
//!                      ┌───────────── any global aggregate? ┤
//!                      ▼                                   ▼
//!                 stats::compute                 group (if amount) ──▶ sort
//!                      │                                   │
//!                      ▼                                   ▼
//!           QueryOutput::Aggregates               QueryOutput::Rows
//! ```
//!
//! Parsing is eager: every token is decoded before any card is looked at, so
//! a bad token fails the whole query with no partial output.

use serde::Serialize;
use tracing::debug;

use crate::attributes::{AttrValue, Attribute, Predicate};
use crate::error::Result;
use crate::model::Card;

pub mod directive;
pub mod group;
pub mod sort;
pub mod stats;

pub use directive::{parse_directives, Aggregate, Directive};
pub use stats::AggregateReport;

/// A card as seen by the engine: the card plus the number of copies it
/// stands for. Grouping raises `amount`; everything else reads through to
/// the card.
/// `amount` is wider than `Card::copies` so group sums stay exact.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub card: &'a Card,
    pub amount: u64,
}

impl<'a> Record<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            amount: u64::from(card.copies),
        }
    }

    pub fn value(&self, attr: Attribute) -> AttrValue {
        match attr {
            Attribute::Amount => AttrValue::Number(self.amount as f64),
            _ => self.card.get_attr(attr),
        }
    }
}

/// One printable result line; `values` line up with the output's columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub values: Vec<AttrValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QueryOutput {
    Rows {
        columns: Vec<Attribute>,
        rows: Vec<Row>,
    },
    Aggregates {
        aggregates: Vec<AggregateReport>,
        /// Number of records the statistics were computed over.
        matched: usize,
    },
}

impl QueryOutput {
    /// True when no record passed the filters.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryOutput::Rows { rows, .. } => rows.is_empty(),
            QueryOutput::Aggregates { matched, .. } => *matched == 0,
        }
    }
}

/// A parsed invocation: directives in command-line order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    directives: Vec<Directive>,
}

impl Query {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn parse<I: AsRef<str>>(tokens: &[I]) -> Result<Self> {
        parse_directives(tokens).map(Self::new)
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Printed attributes in first-mention order, each once.
    pub fn columns(&self) -> Vec<Attribute> {
        let mut columns = Vec::new();
        for directive in self.directives.iter().filter(|d| d.is_printed()) {
            if !columns.contains(&directive.attr) {
                columns.push(directive.attr);
            }
        }
        columns
    }

    /// AND of every directive's OR-filter.
    pub fn predicate(&self) -> Predicate {
        Predicate::new(self.directives.iter().filter_map(Directive::filter).collect())
    }

    /// Requested global statistics, without repeats.
    pub fn aggregates(&self) -> Vec<(Attribute, Aggregate)> {
        let mut requested = Vec::new();
        for directive in &self.directives {
            if let Some(aggregate) = directive.aggregate {
                let pair = (directive.attr, aggregate);
                if !requested.contains(&pair) {
                    requested.push(pair);
                }
            }
        }
        requested
    }

    /// Records are grouped when `amount` is printed or filtered.
    pub fn groups(&self) -> bool {
        self.directives
            .iter()
            .any(|d| d.attr == Attribute::Amount && d.aggregate.is_none())
    }

    /// Evaluate against a collection.
    ///
    /// Filters on `amount` run after grouping, against group counts. Global
    /// statistics see the filtered records before any grouping.
    pub fn run(&self, cards: &[Card]) -> Result<QueryOutput> {
        let (amount_filter, filter) = self.predicate().partition(Attribute::Amount);

        let mut records: Vec<Record<'_>> = cards
            .iter()
            .map(Record::new)
            .filter(|r| filter.matches_with(|attr| r.value(attr)))
            .collect();
        debug!(total = cards.len(), matched = records.len(), "applied filters");

        let aggregates = self.aggregates();
        if !aggregates.is_empty() {
            records.retain(|r| amount_filter.matches_with(|attr| r.value(attr)));
            let aggregates = aggregates
                .into_iter()
                .map(|(attribute, aggregate)| {
                    stats::compute(&records, attribute, aggregate).map(|value| AggregateReport {
                        attribute,
                        aggregate,
                        value,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            return Ok(QueryOutput::Aggregates {
                aggregates,
                matched: records.len(),
            });
        }

        let columns = self.columns();
        if self.groups() {
            records = group::group(records, &columns);
        }
        records.retain(|r| amount_filter.matches_with(|attr| r.value(attr)));
        sort::sort_records(&mut records, &columns);

        let rows = records
            .iter()
            .map(|r| Row {
                values: columns.iter().map(|attr| r.value(*attr)).collect(),
            })
            .collect();
        Ok(QueryOutput::Rows { columns, rows })
    }
}

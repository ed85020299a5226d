use std::collections::HashSet;

use serde::Serialize;

use super::{Aggregate, Record};
use crate::attributes::{AttrValue, Attribute};
use crate::error::{CardqError, Result};

/// One global statistic, reported once for the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub attribute: Attribute,
    pub aggregate: Aggregate,
    pub value: f64,
}

/// Compute `aggregate` over `attr` across `records`.
///
/// Missing values are skipped. Numeric statistics weigh each record by its
/// copy count, except for `amount` itself, whose value already is a count.
pub fn compute(records: &[Record<'_>], attr: Attribute, aggregate: Aggregate) -> Result<f64> {
    let empty = || CardqError::EmptySet {
        attribute: attr.name(),
        aggregate: aggregate.name(),
    };

    match aggregate {
        Aggregate::Unique => Ok(distinct_count(records, attr) as f64),
        Aggregate::Total => Ok(weighted_values(records, attr)
            .iter()
            .map(|(value, weight)| value * *weight as f64)
            .sum()),
        Aggregate::Max => weighted_values(records, attr)
            .into_iter()
            .map(|(value, _)| value)
            .reduce(f64::max)
            .ok_or_else(empty),
        Aggregate::Min => weighted_values(records, attr)
            .into_iter()
            .map(|(value, _)| value)
            .reduce(f64::min)
            .ok_or_else(empty),
        Aggregate::Avg => {
            let values = weighted_values(records, attr);
            let count: u64 = values.iter().map(|(_, weight)| weight).sum();
            if count == 0 {
                return Err(empty());
            }
            let sum: f64 = values
                .iter()
                .map(|(value, weight)| value * *weight as f64)
                .sum();
            Ok(sum / count as f64)
        }
        Aggregate::Median => median(weighted_values(records, attr)).ok_or_else(empty),
    }
}

fn distinct_count(records: &[Record<'_>], attr: Attribute) -> usize {
    records
        .iter()
        .map(|r| r.value(attr))
        .filter(|v| !v.is_missing())
        .collect::<HashSet<AttrValue>>()
        .len()
}

/// Present numeric values paired with the number of copies they stand for.
/// Records with zero copies contribute nothing.
fn weighted_values(records: &[Record<'_>], attr: Attribute) -> Vec<(f64, u64)> {
    records
        .iter()
        .filter_map(|record| {
            let value = record.value(attr).as_number()?;
            let weight = if attr == Attribute::Amount {
                1
            } else {
                record.amount
            };
            Some((value, weight))
        })
        .filter(|(_, weight)| *weight > 0)
        .collect()
}

fn median(mut values: Vec<(f64, u64)>) -> Option<f64> {
    let count: u64 = values.iter().map(|(_, weight)| weight).sum();
    if count == 0 {
        return None;
    }
    values.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mid = count / 2;
    if count % 2 == 0 {
        Some((value_at(&values, mid - 1)? + value_at(&values, mid)?) / 2.0)
    } else {
        value_at(&values, mid)
    }
}

/// The value at `position` of the sorted, copy-expanded sequence.
fn value_at(sorted: &[(f64, u64)], position: u64) -> Option<f64> {
    let mut seen = 0u64;
    for (value, weight) in sorted {
        seen += weight;
        if position < seen {
            return Some(*value);
        }
    }
    None
}

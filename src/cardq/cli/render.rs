//! Output formatting for query results.
//!
//! Rendering functions build strings so they can be tested without a
//! terminal; `print_*` helpers write them out.

use cardq::api::{CmdMessage, MessageLevel};
use cardq::attributes::{AttrValue, Attribute};
use cardq::query::{AggregateReport, QueryOutput, Row};
use colored::Colorize;
use serde_json::{json, Map, Value};
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

/// Display form of a single value.
pub(super) fn format_value(attr: Attribute, value: &AttrValue) -> String {
    match (attr, value) {
        (_, AttrValue::Missing) => "-".to_string(),
        (Attribute::Usd, AttrValue::Number(n)) => format!("${:.2}", n),
        (Attribute::Eur, AttrValue::Number(n)) => format!("€{:.2}", n),
        (_, AttrValue::Number(n)) => format_number(*n),
        (_, other) => other.to_string(),
    }
}

/// Round to two decimals and drop trailing zeros.
fn format_number(n: f64) -> String {
    let rounded = format!("{:.2}", n);
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Left-aligned columns separated by `gap` spaces.
pub(super) fn render_rows(columns: &[Attribute], rows: &[Row], gap: usize) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .zip(&row.values)
                .map(|(attr, value)| format_value(*attr, value))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| cells.iter().map(|row| row[i].width()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &cells {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str(&" ".repeat(gap));
            }
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i].saturating_sub(cell.width())));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One `<Stat> <attribute>: <value>` line per report.
pub(super) fn render_aggregates(reports: &[AggregateReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let name = report.aggregate.name();
        let mut label = name[..1].to_uppercase();
        label.push_str(&name[1..]);

        let value = if report.aggregate.requires_numeric() {
            format_value(report.attribute, &AttrValue::Number(report.value))
        } else {
            format_number(report.value)
        };
        out.push_str(&format!("{} {}: {}\n", label, report.attribute, value));
    }
    out
}

pub(super) fn render_text(output: &QueryOutput, gap: usize) -> String {
    match output {
        _ if output.is_empty() => "No matches found\n".to_string(),
        QueryOutput::Rows { columns, rows } if columns.is_empty() => {
            format!("{} matching cards\n", rows.len())
        }
        QueryOutput::Rows { columns, rows } => render_rows(columns, rows, gap),
        QueryOutput::Aggregates { aggregates, .. } => render_aggregates(aggregates),
    }
}

pub(super) fn render_decks(decks: &[String]) -> String {
    let mut out = String::from("Saved decks:\n");
    for deck in decks {
        out.push_str(&format!("    {}\n", deck));
    }
    out
}

/// Rows become objects keyed by attribute name.
pub(super) fn output_to_json(output: &QueryOutput) -> Value {
    match output {
        QueryOutput::Rows { columns, rows } => {
            let rows: Vec<Value> = rows
                .iter()
                .map(|row| {
                    let object: Map<String, Value> = columns
                        .iter()
                        .zip(&row.values)
                        .map(|(attr, value)| (attr.name().to_string(), json!(value)))
                        .collect();
                    Value::Object(object)
                })
                .collect();
            json!({ "columns": columns, "rows": rows })
        }
        QueryOutput::Aggregates {
            aggregates,
            matched,
        } => json!({ "aggregates": aggregates, "matched": matched }),
    }
}

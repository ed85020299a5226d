//! # CLI Behavior
//!
//! This is **one possible UI client** for cardq, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! ## Terms
//!
//! Everything after the options is a term. Terms starting with `-` are
//! attribute flags handed to the query engine untouched; any other term names
//! a deck, and `*` stands for the whole collection.
//!
//! ```text
//! cardq --unique elves goblins -amount -name -type#?Creature
//! ```
//!
//! ## Output
//!
//! - Rows print as aligned columns, aggregates as `Total usd: $5.50` lines.
//! - `--output json` prints one JSON document with the same data.
//! - Logs and warnings go to stderr; results go to stdout.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-operation handlers
//! - `logging`: tracing subscriber setup
//! - `render`: Output formatting (tables, aggregates, JSON, messages)
//! - `setup`: Argument parsing via clap, help text

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;

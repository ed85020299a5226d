//! # Cardq Architecture
//!
//! Cardq queries a personal trading-card collection with terse attribute
//! flags that select columns, filter cards, sort rows and compute statistics
//! in one go:
//!
//! ```text
//! cardq elves -amount -name -cmc<2/>5 -type#?Creature
//! cardq '*' -total-usd -median-cmc
//! ```
//!
//! Like any tool built this way, it is a library with a thin CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) and Commands (commands/*.rs)            │
//! │  - Resolve deck names, load decks, run the query            │
//! │  - Return structured `CmdResult`s                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (query/, attributes/)                               │
//! │  - Pure, synchronous transformation of an in-memory         │
//! │    collection into sorted rows or aggregate scalars         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DeckStore` trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Query and deck listing operations
//! - [`query`]: Directive parsing, grouping, statistics and sorting
//! - [`attributes`]: Attribute registry, values and filters
//! - [`store`]: Deck storage abstraction and implementations
//! - [`model`]: The card record
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging and printing for the binary (not part of the lib API)

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

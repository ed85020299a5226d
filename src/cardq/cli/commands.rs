//! # CLI Layer
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into a [`Cli`]
//! 2. **Context Setup**: `init_context()` resolves config and deck directory
//! 3. **API Dispatch**: handlers call the `CardqApi`
//! 4. **Output Formatting**: `CmdResult`s are rendered as text or JSON
//!
//! ## Environment
//!
//! - `CARDQ_CONFIG_DIR`: directory holding `config.json`
//! - `CARDQ_DECK_DIR`: deck directory, below `--dir` and above the config file
//! - `RUST_LOG`: log filter, overrides `--verbose`

use super::logging;
use super::render::{output_to_json, print_messages, render_decks, render_text};
use super::setup::{Cli, OutputFormat};
use cardq::api::{CardqApi, CmdResult, MessageLevel};
use cardq::config::CardqConfig;
use cardq::error::Result;
use cardq::query::QueryOutput;
use cardq::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::debug;

const CONFIG_DIR_ENV: &str = "CARDQ_CONFIG_DIR";
const DECK_DIR_ENV: &str = "CARDQ_DECK_DIR";

struct AppContext {
    api: CardqApi<FileStore>,
    output: OutputFormat,
    unique: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = init_context(&cli)?;
    let (decks, tokens) = cli.split_terms();

    let query = if decks.is_empty() && tokens.is_empty() {
        None
    } else {
        Some(ctx.api.query(decks.as_slice(), tokens.as_slice())?)
    };
    let listing = if cli.lists_decks() {
        Some(ctx.api.list_decks()?)
    } else {
        None
    };

    if query.is_none() && listing.is_none() {
        println!("Nothing to query. Name a deck ('*' for all cards) or see 'cardq --help'.");
        return Ok(());
    }

    match ctx.output {
        OutputFormat::Text => print_text(&ctx, query, listing),
        OutputFormat::Json => print_json(&ctx, query, listing)?,
    }
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dirs = ProjectDirs::from("com", "cardq", "cardq");

    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs.as_ref().map(|d| d.config_dir().to_path_buf()));
    let config = match config_dir {
        Some(dir) => CardqConfig::load(dir)?,
        None => CardqConfig::default(),
    };

    let fallback = dirs
        .as_ref()
        .map(|d| d.data_dir().join("decks"))
        .unwrap_or_else(|| PathBuf::from("decks"));
    let overridden = cli
        .dir
        .clone()
        .or_else(|| std::env::var_os(DECK_DIR_ENV).map(PathBuf::from));
    let deck_dir = config.resolve_deck_dir(overridden, fallback);
    debug!(deck_dir = %deck_dir.display(), "resolved deck directory");

    Ok(AppContext {
        api: CardqApi::new(FileStore::new(deck_dir), config),
        output: cli.output,
        unique: cli.counts_unique(),
    })
}

/// Rows printed, or records the statistics covered.
fn match_count(output: &QueryOutput) -> usize {
    match output {
        QueryOutput::Rows { rows, .. } => rows.len(),
        QueryOutput::Aggregates { matched, .. } => *matched,
    }
}

fn print_text(ctx: &AppContext, query: Option<CmdResult>, listing: Option<CmdResult>) {
    let gap = ctx.api.config().column_gap;

    if let Some(result) = query {
        if let Some(output) = &result.output {
            print!("{}", render_text(output, gap));
            if ctx.unique && !output.is_empty() {
                println!("Unique: {}", match_count(output));
            }
            println!();
        }
        print_messages(&result.messages);
    }

    if let Some(result) = listing {
        if !result.decks.is_empty() {
            print!("{}", render_decks(&result.decks));
            println!();
        }
        print_messages(&result.messages);
    }
}

fn print_json(
    ctx: &AppContext,
    query: Option<CmdResult>,
    listing: Option<CmdResult>,
) -> Result<()> {
    let mut document = json!({});

    if let Some(result) = query {
        if let Some(output) = &result.output {
            document = output_to_json(output);
            if ctx.unique {
                document["unique"] = json!(match_count(output));
            }
        }
        // stdout carries the JSON document; only warnings (stderr) get through.
        let warnings: Vec<_> = result
            .messages
            .into_iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .collect();
        print_messages(&warnings);
    }

    if let Some(result) = listing {
        document["decks"] = Value::from(result.decks);
    }

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

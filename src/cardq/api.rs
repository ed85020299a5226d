//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every cardq operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (`*` becomes the configured all-cards deck)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never formats; that is the CLI's job.
//!
//! `CardqApi<S: DeckStore>` is generic over the storage backend:
//! `CardqApi<FileStore>` in production, `CardqApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::CardqConfig;
use crate::error::Result;
use crate::store::DeckStore;

/// Token that stands for the whole collection.
pub const ALL_CARDS: &str = "*";

pub struct CardqApi<S: DeckStore> {
    store: S,
    config: CardqConfig,
}

impl<S: DeckStore> CardqApi<S> {
    pub fn new(store: S, config: CardqConfig) -> Self {
        Self { store, config }
    }

    /// Run attribute `tokens` against the named decks.
    pub fn query<D: AsRef<str>, I: AsRef<str>>(
        &self,
        decks: &[D],
        tokens: &[I],
    ) -> Result<commands::CmdResult> {
        let decks = self.resolve_decks(decks);
        commands::query::run(&self.store, &decks, tokens)
    }

    pub fn list_decks(&self) -> Result<commands::CmdResult> {
        commands::decks::run(&self.store)
    }

    pub fn config(&self) -> &CardqConfig {
        &self.config
    }

    fn resolve_decks<D: AsRef<str>>(&self, decks: &[D]) -> Vec<String> {
        decks
            .iter()
            .map(|d| match d.as_ref() {
                ALL_CARDS => self.config.all_cards_deck.clone(),
                name => name.to_string(),
            })
            .collect()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

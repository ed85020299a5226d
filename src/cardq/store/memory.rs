use super::DeckStore;
use crate::error::{CardqError, Result};
use crate::model::Card;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    decks: BTreeMap<String, Vec<Card>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deck(mut self, name: impl Into<String>, cards: Vec<Card>) -> Self {
        self.decks.insert(name.into(), cards);
        self
    }
}

impl DeckStore for InMemoryStore {
    fn load_deck(&self, name: &str) -> Result<Vec<Card>> {
        self.decks
            .get(name)
            .cloned()
            .ok_or_else(|| CardqError::DeckNotFound(name.to_string()))
    }

    fn list_decks(&self) -> Result<Vec<String>> {
        Ok(self.decks.keys().cloned().collect())
    }
}

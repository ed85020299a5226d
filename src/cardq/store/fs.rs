use super::DeckStore;
use crate::error::{CardqError, Result};
use crate::model::Card;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn deck_path(&self, name: &str) -> PathBuf {
        self.root.join(name).join(DATA_FILENAME)
    }
}

impl DeckStore for FileStore {
    fn load_deck(&self, name: &str) -> Result<Vec<Card>> {
        let path = self.deck_path(name);
        if !path.is_file() {
            return Err(CardqError::DeckNotFound(format!(
                "{} (expected {})",
                name,
                path.display()
            )));
        }

        let content = fs::read_to_string(&path).map_err(CardqError::Io)?;
        let cards: Vec<Card> = serde_json::from_str(&content).map_err(CardqError::Serialization)?;
        debug!(deck = name, cards = cards.len(), "loaded deck");
        Ok(cards)
    }

    fn list_decks(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(CardqError::Io)? {
            let entry = entry.map_err(CardqError::Io)?;
            if entry.path().join(DATA_FILENAME).is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

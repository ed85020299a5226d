use crate::error::{CardqError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ALL_CARDS_DECK: &str = "collection";
const DEFAULT_COLUMN_GAP: usize = 4;

/// Configuration for cardq, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CardqConfig {
    /// Directory holding one sub-directory per deck
    #[serde(default)]
    pub deck_dir: Option<PathBuf>,

    /// Deck loaded when `*` is given on the command line
    #[serde(default = "default_all_cards_deck")]
    pub all_cards_deck: String,

    /// Spaces between printed columns
    #[serde(default = "default_column_gap")]
    pub column_gap: usize,
}

fn default_all_cards_deck() -> String {
    DEFAULT_ALL_CARDS_DECK.to_string()
}

fn default_column_gap() -> usize {
    DEFAULT_COLUMN_GAP
}

impl Default for CardqConfig {
    fn default() -> Self {
        Self {
            deck_dir: None,
            all_cards_deck: default_all_cards_deck(),
            column_gap: DEFAULT_COLUMN_GAP,
        }
    }
}

impl CardqConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CardqError::Io)?;
        let config: CardqConfig =
            serde_json::from_str(&content).map_err(CardqError::Serialization)?;
        Ok(config)
    }

    /// Pick the deck directory: explicit override first, then the configured
    /// one, then `fallback`.
    pub fn resolve_deck_dir(&self, overridden: Option<PathBuf>, fallback: PathBuf) -> PathBuf {
        overridden
            .or_else(|| self.deck_dir.clone())
            .unwrap_or(fallback)
    }
}

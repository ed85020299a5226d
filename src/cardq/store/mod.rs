//! # Storage Layer
//!
//! Decks are the card collections a query runs over. The [`DeckStore`] trait
//! lets commands load them without knowing where they live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one directory per deck
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! decks/
//! ├── collection/
//! │   └── data.json     # JSON array of card records
//! └── elves/
//!     └── data.json
//! ```

use crate::error::Result;
use crate::model::Card;

pub mod fs;
pub mod memory;

/// Abstract interface for deck storage.
pub trait DeckStore {
    /// Load every card record of a deck, in stored order.
    fn load_deck(&self, name: &str) -> Result<Vec<Card>>;

    /// Names of all saved decks, sorted.
    fn list_decks(&self) -> Result<Vec<String>>;
}

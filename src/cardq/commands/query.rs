use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::Query;
use crate::store::DeckStore;
use tracing::debug;

/// Run a query over the union of `decks`.
///
/// Every token is parsed before any deck is read. Decks named more than
/// once are loaded once; records keep first-mention deck order.
pub fn run<S: DeckStore, I: AsRef<str>>(
    store: &S,
    decks: &[String],
    tokens: &[I],
) -> Result<CmdResult> {
    let query = Query::parse(tokens)?;

    let mut loaded: Vec<&str> = Vec::new();
    for deck in decks {
        if !loaded.contains(&deck.as_str()) {
            loaded.push(deck);
        }
    }

    if loaded.is_empty() {
        let mut result = CmdResult::default();
        if !tokens.is_empty() {
            result.add_message(CmdMessage::warning(
                "No deck given. Name a deck, or use '*' for the whole collection.",
            ));
        }
        return Ok(result);
    }

    let mut cards = Vec::new();
    for deck in &loaded {
        cards.extend(store.load_deck(deck)?);
    }
    debug!(decks = ?loaded, cards = cards.len(), "running query");

    let output = query.run(&cards)?;
    Ok(CmdResult::default().with_output(output))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DeckStore;

pub fn run<S: DeckStore>(store: &S) -> Result<CmdResult> {
    let decks = store.list_decks()?;
    let mut result = CmdResult::default();
    if decks.is_empty() {
        result.add_message(CmdMessage::info("No saved decks."));
    }
    Ok(result.with_decks(decks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_saved_decks() {
        let store = InMemoryStore::new()
            .with_deck("zombies", Vec::new())
            .with_deck("elves", Vec::new());
        let result = run(&store).unwrap();
        assert_eq!(result.decks, vec!["elves", "zombies"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_says_so() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.decks.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}

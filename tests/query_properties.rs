use cardq::attributes::AttrValue;
use cardq::model::Card;
use cardq::query::{Query, QueryOutput, Row};
use proptest::prelude::*;

const NAMES: &[&str] = &["Lightning Bolt", "Llanowar Elves", "Forest", "Shivan Dragon"];

fn card_strategy() -> impl Strategy<Value = Card> {
    (
        prop::sample::select(NAMES),
        0u32..8,
        1u32..5,
        prop::option::of(0u32..1000),
        any::<bool>(),
    )
        .prop_map(|(name, cmc, copies, cents, foil)| {
            let mut card = Card::new(name);
            card.cmc = f64::from(cmc);
            card.copies = copies;
            card.usd = cents.map(|c| f64::from(c) / 100.0);
            card.foil = foil;
            card
        })
}

fn rows(cards: &[Card], tokens: &[&str]) -> Vec<Row> {
    match Query::parse(tokens).unwrap().run(cards).unwrap() {
        QueryOutput::Rows { rows, .. } => rows,
        QueryOutput::Aggregates { .. } => panic!("expected rows"),
    }
}

proptest! {
    #[test]
    fn extra_clause_never_shrinks_matches(
        cards in prop::collection::vec(card_strategy(), 0..30),
        low in 0u32..8,
        high in 0u32..8,
    ) {
        let narrow = format!("-cmc#<{}", low);
        let wide = format!("-cmc#<{}/>{}", low, high);
        let narrow_rows = rows(&cards, &["-name", &narrow]);
        let wide_rows = rows(&cards, &["-name", &wide]);
        prop_assert!(narrow_rows.len() <= wide_rows.len());
    }

    #[test]
    fn and_never_exceeds_either_filter(
        cards in prop::collection::vec(card_strategy(), 0..30),
        cmc in 0u32..8,
        limit in 0u32..1000,
    ) {
        let by_cmc = format!("-cmc#>={}", cmc);
        let by_price = format!("-usd#<{}_{:02}", limit / 100, limit % 100);
        let cmc_only = rows(&cards, &["-name", &by_cmc]);
        let price_only = rows(&cards, &["-name", &by_price]);
        let both = rows(&cards, &["-name", &by_cmc, &by_price]);
        prop_assert!(both.len() <= cmc_only.len());
        prop_assert!(both.len() <= price_only.len());
    }

    #[test]
    fn grouping_conserves_copies(cards in prop::collection::vec(card_strategy(), 0..30)) {
        let owned: f64 = cards.iter().map(|c| f64::from(c.copies)).sum();
        let grouped = rows(&cards, &["-amount", "-name"]);
        let counted: f64 = grouped
            .iter()
            .filter_map(|row| row.values[0].as_number())
            .sum();
        prop_assert_eq!(owned, counted);

        let mut names: Vec<&AttrValue> = grouped.iter().map(|row| &row.values[1]).collect();
        let before = names.len();
        names.dedup();
        prop_assert_eq!(before, names.len());
    }

    #[test]
    fn rows_come_out_sorted(cards in prop::collection::vec(card_strategy(), 0..30)) {
        let sorted = rows(&cards, &["-foil", "-usd", "-name"]);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].values <= pair[1].values);
        }
    }
}

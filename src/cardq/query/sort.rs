use std::cmp::Ordering;

use super::Record;
use crate::attributes::Attribute;

/// Compare two records on `keys`, first key first, each ascending.
pub fn compare(a: &Record<'_>, b: &Record<'_>, keys: &[Attribute]) -> Ordering {
    keys.iter()
        .map(|attr| a.value(*attr).cmp(&b.value(*attr)))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Stable multi-key sort: records equal on every key keep their input order.
pub fn sort_records(records: &mut [Record<'_>], keys: &[Attribute]) {
    records.sort_by(|a, b| compare(a, b, keys));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;

    fn card(name: &str, cmc: f64, foil: bool) -> Card {
        let mut card = Card::new(name);
        card.cmc = cmc;
        card.foil = foil;
        card
    }

    fn names(records: &[Record<'_>]) -> Vec<String> {
        records.iter().map(|r| r.card.name.clone()).collect()
    }

    #[test]
    fn first_key_dominates() {
        let cards = [
            card("Bolt", 1.0, false),
            card("Anger", 4.0, false),
            card("Counterspell", 2.0, false),
            card("Abundance", 1.0, false),
        ];
        let mut records: Vec<_> = cards.iter().map(Record::new).collect();

        sort_records(&mut records, &[Attribute::Cmc, Attribute::Name]);
        assert_eq!(names(&records), ["Abundance", "Bolt", "Counterspell", "Anger"]);

        sort_records(&mut records, &[Attribute::Name]);
        assert_eq!(names(&records), ["Abundance", "Anger", "Bolt", "Counterspell"]);
    }

    #[test]
    fn numbers_sort_arithmetically() {
        let cards = [card("Ten", 10.0, false), card("Two", 2.0, false)];
        let mut records: Vec<_> = cards.iter().map(Record::new).collect();
        sort_records(&mut records, &[Attribute::Cmc]);
        assert_eq!(names(&records), ["Two", "Ten"]);
    }

    #[test]
    fn flags_sort_false_first() {
        let cards = [card("Shiny", 1.0, true), card("Plain", 1.0, false)];
        let mut records: Vec<_> = cards.iter().map(Record::new).collect();
        sort_records(&mut records, &[Attribute::Foil]);
        assert_eq!(names(&records), ["Plain", "Shiny"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let cards = [
            card("Second", 1.0, false),
            card("First", 1.0, false),
            card("Zero", 0.0, false),
        ];
        let mut records: Vec<_> = cards.iter().map(Record::new).collect();
        sort_records(&mut records, &[Attribute::Cmc]);
        assert_eq!(names(&records), ["Zero", "Second", "First"]);

        let once = names(&records);
        sort_records(&mut records, &[Attribute::Cmc]);
        assert_eq!(names(&records), once);
    }

    #[test]
    fn missing_values_sort_first() {
        let mut priced = card("Priced", 1.0, false);
        priced.usd = Some(0.5);
        let unpriced = card("Unpriced", 1.0, false);
        let cards = [priced, unpriced];

        let mut records: Vec<_> = cards.iter().map(Record::new).collect();
        sort_records(&mut records, &[Attribute::Usd]);
        assert_eq!(names(&records), ["Unpriced", "Priced"]);
    }
}

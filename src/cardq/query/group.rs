use std::collections::HashMap;

use tracing::debug;

use super::Record;
use crate::attributes::{AttrValue, Attribute};

/// Collapse records that agree on every key attribute into one record whose
/// `amount` is the sum of the members' amounts.
///
/// `amount` itself never takes part in the key. Groups keep the position of
/// their first member.
pub fn group<'a>(records: Vec<Record<'a>>, keys: &[Attribute]) -> Vec<Record<'a>> {
    let keys: Vec<Attribute> = keys
        .iter()
        .copied()
        .filter(|attr| *attr != Attribute::Amount)
        .collect();

    let input = records.len();
    let mut positions: HashMap<Vec<AttrValue>, usize> = HashMap::new();
    let mut groups: Vec<Record<'a>> = Vec::new();

    for record in records {
        let key: Vec<AttrValue> = keys.iter().map(|attr| record.value(*attr)).collect();
        match positions.get(&key) {
            Some(&i) => groups[i].amount += record.amount,
            None => {
                positions.insert(key, groups.len());
                groups.push(record);
            }
        }
    }

    debug!(input, groups = groups.len(), "grouped records");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Card;

    fn card(name: &str, set: &str) -> Card {
        let mut card = Card::new(name);
        card.set = set.into();
        card
    }

    #[test]
    fn merges_on_selected_attributes_only() {
        let cards = vec![
            card("Forest", "Alpha"),
            card("Forest", "Beta"),
            card("Island", "Alpha"),
            card("Forest", "Alpha"),
        ];
        let records: Vec<_> = cards.iter().map(Record::new).collect();

        let by_name = group(records.clone(), &[Attribute::Name, Attribute::Amount]);
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name[0].card.name, "Forest");
        assert_eq!(by_name[0].amount, 3);
        assert_eq!(by_name[1].amount, 1);

        let by_name_and_set = group(records, &[Attribute::Name, Attribute::Set]);
        assert_eq!(by_name_and_set.len(), 3);
        assert_eq!(by_name_and_set[0].amount, 2);
    }

    #[test]
    fn copies_add_up() {
        let mut a = card("Forest", "Alpha");
        a.copies = 4;
        let b = card("Forest", "Beta");
        let cards = [a, b];

        let groups = group(cards.iter().map(Record::new).collect(), &[Attribute::Name]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].amount, 5);
        assert_eq!(groups[0].value(Attribute::Amount), AttrValue::Number(5.0));
    }

    #[test]
    fn sums_past_u32() {
        let mut a = card("Forest", "Alpha");
        a.copies = u32::MAX;
        let b = a.clone();
        let cards = [a, b];

        let groups = group(cards.iter().map(Record::new).collect(), &[Attribute::Name]);
        assert_eq!(groups[0].amount, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn no_keys_collapses_everything() {
        let cards = [card("Forest", "Alpha"), card("Island", "Beta")];
        let groups = group(cards.iter().map(Record::new).collect(), &[Attribute::Amount]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].amount, 2);
    }
}

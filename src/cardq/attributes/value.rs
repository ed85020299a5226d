//! Attribute value types.
//!
//! This module defines the runtime representation of attribute values and
//! how each attribute is read from a [`Card`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use super::Attribute;
use crate::model::Card;

/// Runtime representation of an attribute value.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    Flag(bool),
    /// The card has no value for this attribute (no subtype, no price).
    Missing,
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, AttrValue::Missing)
    }

    /// Text form used by `=`, `!=`, `?` and `!?` clauses.
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Flag(b) => Some(b.to_string()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Missing => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            AttrValue::Missing => 0,
            AttrValue::Flag(_) => 1,
            AttrValue::Number(_) => 2,
            AttrValue::Text(_) => 3,
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttrValue {}

impl PartialOrd for AttrValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ascending order: missing values first, then numbers arithmetically,
/// text lexicographically and flags with `false < true`.
impl Ord for AttrValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (AttrValue::Number(a), AttrValue::Number(b)) => a.total_cmp(b),
            (AttrValue::Text(a), AttrValue::Text(b)) => a.cmp(b),
            (AttrValue::Flag(a), AttrValue::Flag(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for AttrValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            AttrValue::Number(n) => n.to_bits().hash(state),
            AttrValue::Text(s) => s.hash(state),
            AttrValue::Flag(b) => b.hash(state),
            AttrValue::Missing => {}
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Flag(b) => write!(f, "{}", b),
            AttrValue::Missing => f.write_str("-"),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Number(n) => serializer.serialize_f64(*n),
            AttrValue::Text(s) => serializer.serialize_str(s),
            AttrValue::Flag(b) => serializer.serialize_bool(*b),
            AttrValue::Missing => serializer.serialize_none(),
        }
    }
}

impl Card {
    /// Read an attribute from this card.
    ///
    /// `amount` reads the stored copy count; once records are grouped the
    /// engine substitutes the group's count instead.
    pub fn get_attr(&self, attr: Attribute) -> AttrValue {
        match attr {
            Attribute::Amount => AttrValue::Number(f64::from(self.copies)),
            Attribute::Foil => AttrValue::Flag(self.foil),
            Attribute::Name => AttrValue::Text(self.name.clone()),
            Attribute::Lang => AttrValue::Text(self.lang.clone()),
            Attribute::Cost => AttrValue::Text(self.cost.clone()),
            Attribute::Cmc => AttrValue::Number(self.cmc),
            Attribute::Type => AttrValue::Text(self.card_type.clone()),
            Attribute::Subtype => self
                .subtype
                .clone()
                .map_or(AttrValue::Missing, AttrValue::Text),
            Attribute::Color => AttrValue::Text(self.color.clone()),
            Attribute::Identity => AttrValue::Text(self.identity.clone()),
            Attribute::Text => AttrValue::Text(self.text.clone()),
            Attribute::Modern => AttrValue::Flag(self.modern),
            Attribute::Commander => AttrValue::Flag(self.commander),
            Attribute::Set => AttrValue::Text(self.set.clone()),
            Attribute::Number => AttrValue::Text(self.number.clone()),
            Attribute::Rarity => AttrValue::Text(self.rarity.clone()),
            Attribute::Fullart => AttrValue::Flag(self.fullart),
            Attribute::Usd => self.usd.map_or(AttrValue::Missing, AttrValue::Number),
            Attribute::Eur => self.eur.map_or(AttrValue::Missing, AttrValue::Number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_by_attribute() {
        let mut card = Card::new("Llanowar Elves");
        card.cmc = 1.0;
        card.subtype = Some("Elf Druid".into());
        card.foil = true;

        assert_eq!(card.get_attr(Attribute::Name), AttrValue::Text("Llanowar Elves".into()));
        assert_eq!(card.get_attr(Attribute::Cmc), AttrValue::Number(1.0));
        assert_eq!(card.get_attr(Attribute::Subtype), AttrValue::Text("Elf Druid".into()));
        assert_eq!(card.get_attr(Attribute::Foil), AttrValue::Flag(true));
        assert_eq!(card.get_attr(Attribute::Amount), AttrValue::Number(1.0));
        assert!(card.get_attr(Attribute::Usd).is_missing());
    }

    #[test]
    fn flags_order_false_before_true() {
        assert!(AttrValue::Flag(false) < AttrValue::Flag(true));
    }

    #[test]
    fn numbers_compare_arithmetically() {
        assert!(AttrValue::Number(2.0) < AttrValue::Number(10.0));
        assert!(AttrValue::Text("10".into()) < AttrValue::Text("2".into()));
    }

    #[test]
    fn missing_sorts_first() {
        assert!(AttrValue::Missing < AttrValue::Number(0.0));
        assert!(AttrValue::Missing < AttrValue::Text(String::new()));
    }

    #[test]
    fn flag_text_form() {
        assert_eq!(AttrValue::Flag(true).as_text().as_deref(), Some("true"));
        assert_eq!(AttrValue::Missing.as_text(), None);
    }
}

//! Attribute specifications and registry.
//!
//! This module defines the schema for queryable card attributes: their names
//! on the command line and what kind of value they hold. The value kind
//! decides which filter operators and aggregates an attribute accepts.

use once_cell::sync::Lazy;
use serde::Serialize;

use super::FilterOp;

/// A queryable card attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Amount,
    Foil,
    Name,
    Lang,
    Cost,
    Cmc,
    Type,
    Subtype,
    Color,
    Identity,
    Text,
    Modern,
    Commander,
    Set,
    Number,
    Rarity,
    Fullart,
    Usd,
    Eur,
}

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Compared arithmetically; supports every aggregate.
    Numeric,

    /// Free text, compared on its stored representation.
    Text,

    /// Two-valued (`true`/`false`); filtered like text.
    Flag,
}

const NUMERIC_OPS: &[FilterOp] = &[
    FilterOp::Eq,
    FilterOp::Ne,
    FilterOp::Lt,
    FilterOp::Le,
    FilterOp::Gt,
    FilterOp::Ge,
];

const TEXT_OPS: &[FilterOp] = &[
    FilterOp::Eq,
    FilterOp::Ne,
    FilterOp::Contains,
    FilterOp::NotContains,
];

impl ValueKind {
    /// Operators that may appear in a clause on an attribute of this kind.
    pub fn operators(self) -> &'static [FilterOp] {
        match self {
            ValueKind::Numeric => NUMERIC_OPS,
            ValueKind::Text | ValueKind::Flag => TEXT_OPS,
        }
    }

    pub fn allows(self, op: FilterOp) -> bool {
        self.operators().contains(&op)
    }

    pub fn is_numeric(self) -> bool {
        self == ValueKind::Numeric
    }
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The name used in directives (e.g., "cmc", "usd", "subtype")
    pub name: &'static str,

    pub attribute: Attribute,

    pub kind: ValueKind,
}

impl AttributeSpec {
    const fn new(name: &'static str, attribute: Attribute, kind: ValueKind) -> Self {
        Self {
            name,
            attribute,
            kind,
        }
    }
}

/// Registry of all card attributes.
///
/// This is the single source of truth for attribute metadata.
/// Adding a new attribute means adding an entry here and a read in
/// [`Card::get_attr`](crate::model::Card::get_attr).
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("amount", Attribute::Amount, ValueKind::Numeric),
    AttributeSpec::new("foil", Attribute::Foil, ValueKind::Flag),
    AttributeSpec::new("name", Attribute::Name, ValueKind::Text),
    AttributeSpec::new("lang", Attribute::Lang, ValueKind::Text),
    AttributeSpec::new("cost", Attribute::Cost, ValueKind::Text),
    AttributeSpec::new("cmc", Attribute::Cmc, ValueKind::Numeric),
    AttributeSpec::new("type", Attribute::Type, ValueKind::Text),
    AttributeSpec::new("subtype", Attribute::Subtype, ValueKind::Text),
    AttributeSpec::new("color", Attribute::Color, ValueKind::Text),
    AttributeSpec::new("identity", Attribute::Identity, ValueKind::Text),
    AttributeSpec::new("text", Attribute::Text, ValueKind::Text),
    AttributeSpec::new("modern", Attribute::Modern, ValueKind::Flag),
    AttributeSpec::new("commander", Attribute::Commander, ValueKind::Flag),
    AttributeSpec::new("set", Attribute::Set, ValueKind::Text),
    AttributeSpec::new("number", Attribute::Number, ValueKind::Text),
    AttributeSpec::new("rarity", Attribute::Rarity, ValueKind::Text),
    AttributeSpec::new("fullart", Attribute::Fullart, ValueKind::Flag),
    AttributeSpec::new("usd", Attribute::Usd, ValueKind::Numeric),
    AttributeSpec::new("eur", Attribute::Eur, ValueKind::Numeric),
];

// Longest names first so prefix matching picks the most specific attribute.
static BY_NAME_LENGTH: Lazy<Vec<&'static AttributeSpec>> = Lazy::new(|| {
    let mut specs: Vec<_> = ATTRIBUTES.iter().collect();
    specs.sort_by(|a, b| b.name.len().cmp(&a.name.len()));
    specs
});

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Match the longest attribute name that prefixes `text`.
///
/// Returns the spec and whatever follows the name.
pub fn match_prefix(text: &str) -> Option<(&'static AttributeSpec, &str)> {
    BY_NAME_LENGTH
        .iter()
        .find_map(|spec| text.strip_prefix(spec.name).map(|rest| (*spec, rest)))
}

impl Attribute {
    pub fn spec(self) -> &'static AttributeSpec {
        // ATTRIBUTES is declared in variant order.
        &ATTRIBUTES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn kind(self) -> ValueKind {
        self.spec().kind
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_attribute() {
        for name in [
            "amount", "foil", "name", "lang", "cost", "cmc", "type", "subtype", "color",
            "identity", "text", "modern", "commander", "set", "number", "rarity", "fullart",
            "usd", "eur",
        ] {
            let spec = get_spec(name).unwrap();
            assert_eq!(spec.attribute.name(), name);
        }
        assert_eq!(ATTRIBUTES.len(), 19);
    }

    #[test]
    fn registry_is_in_variant_order() {
        for (i, spec) in ATTRIBUTES.iter().enumerate() {
            assert_eq!(spec.attribute as usize, i, "{} out of order", spec.name);
        }
    }

    #[test]
    fn unknown_attribute_returns_none() {
        assert!(get_spec("power").is_none());
        assert!(match_prefix("power").is_none());
    }

    #[test]
    fn kinds_are_correct() {
        assert_eq!(Attribute::Cmc.kind(), ValueKind::Numeric);
        assert_eq!(Attribute::Amount.kind(), ValueKind::Numeric);
        assert_eq!(Attribute::Usd.kind(), ValueKind::Numeric);
        assert_eq!(Attribute::Name.kind(), ValueKind::Text);
        assert_eq!(Attribute::Foil.kind(), ValueKind::Flag);
        assert_eq!(Attribute::Fullart.kind(), ValueKind::Flag);
    }

    #[test]
    fn prefix_match_returns_tail() {
        let (spec, rest) = match_prefix("cmc<2/cmc>5").unwrap();
        assert_eq!(spec.attribute, Attribute::Cmc);
        assert_eq!(rest, "<2/cmc>5");

        let (spec, rest) = match_prefix("subtype?Elf").unwrap();
        assert_eq!(spec.attribute, Attribute::Subtype);
        assert_eq!(rest, "?Elf");
    }

    #[test]
    fn operator_sets_follow_kind() {
        assert!(ValueKind::Numeric.allows(FilterOp::Le));
        assert!(!ValueKind::Numeric.allows(FilterOp::Contains));
        assert!(ValueKind::Text.allows(FilterOp::NotContains));
        assert!(!ValueKind::Text.allows(FilterOp::Lt));
        assert!(!ValueKind::Flag.allows(FilterOp::Gt));
    }
}

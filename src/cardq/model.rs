use serde::{Deserialize, Deserializer, Serialize};

/// One line of a deck: a card printing plus how many copies of it are owned.
///
/// Field names match the `data.json` layout written for each deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "amount", default = "default_copies")]
    pub copies: u32,
    #[serde(default)]
    pub foil: bool,
    pub name: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub cmc: f64,
    #[serde(rename = "type", default)]
    pub card_type: String,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub modern: bool,
    #[serde(default)]
    pub commander: bool,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub fullart: bool,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub eur: Option<f64>,
}

fn default_copies() -> u32 {
    1
}

/// Prices come from the card API as strings (`"2.50"`) but may also be
/// stored as plain numbers.
fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(n)) => Ok(Some(n)),
        Some(RawPrice::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid price '{}'", s))),
    }
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            copies: 1,
            foil: false,
            name: name.into(),
            lang: "en".to_string(),
            cost: String::new(),
            cmc: 0.0,
            card_type: String::new(),
            subtype: None,
            color: String::new(),
            identity: String::new(),
            text: String::new(),
            modern: false,
            commander: false,
            set: String::new(),
            number: String::new(),
            rarity: String::new(),
            fullart: false,
            usd: None,
            eur: None,
        }
    }
}

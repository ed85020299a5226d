use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardqError {
    #[error("'{token}': unknown attribute '{name}'")]
    UnknownAttribute { token: String, name: String },

    #[error("'{token}': operator '{operator}' cannot be used on {attribute}")]
    InvalidOperator {
        token: String,
        attribute: &'static str,
        operator: String,
    },

    #[error("'{token}': malformed clause '{clause}' ({reason})")]
    MalformedClause {
        token: String,
        clause: String,
        reason: String,
    },

    #[error("cannot compute {aggregate} {attribute} of an empty set")]
    EmptySet {
        attribute: &'static str,
        aggregate: &'static str,
    },

    #[error("'{token}': {aggregate} needs a numeric attribute, {attribute} is not")]
    IncompatibleAggregate {
        token: String,
        attribute: &'static str,
        aggregate: &'static str,
    },

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CardqError>;

use thiserror::Error;

/// Errors raised while building the lead store or decoding catalog input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate lead id '{0}'")]
    DuplicateId(String),

    #[error("lead '{id}': budget_from {from} exceeds budget_to {to}")]
    InvertedBudget { id: String, from: u64, to: u64 },

    #[error("lead '{id}': match percent {value} is outside 0..=100")]
    MatchOutOfRange { id: String, value: u8 },

    #[error("lead '{0}': room count must be positive")]
    ZeroRooms(String),

    #[error("unknown {kind} '{value}'")]
    UnknownKey { kind: &'static str, value: String },

    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

impl CatalogError {
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        CatalogError::UnknownKey {
            kind,
            value: value.to_string(),
        }
    }
}

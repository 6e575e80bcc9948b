use thiserror::Error;

pub type Result<T> = std::result::Result<T, BriefMeError>;

#[derive(Debug, Error)]
pub enum BriefMeError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl BriefMeError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        BriefMeError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

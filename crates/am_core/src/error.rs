use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Unknown Western sign: '{0}'")]
    InvalidSign(String),

    #[error("Unknown Chinese animal: '{0}'")]
    InvalidAnimal(String),

    #[error("Unknown year element: '{0}'")]
    InvalidYearElement(String),

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    InvalidSchemaVersion { found: u8, expected: u8 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            MatchError::Deserialization(err.to_string())
        } else {
            MatchError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

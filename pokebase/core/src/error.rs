use crate::pokemon;

use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("malformed pokemon: {0}")]
    Malformed(String),
    #[error("pokemon not found: {0}")]
    IdNotFound(pokemon::Id),
    #[error("pokemon not found: {0}")]
    NameNotFound(String),
    #[error("no pokemon id found for {0}")]
    Unresolved(String),
    #[error("pokemon already exists: {0}")]
    DuplicateName(String),
    #[error("{name} is indexed under {id}, but no such form exists")]
    Inconsistent { name: String, id: pokemon::Id },
    #[error("invalid generation: {0}")]
    InvalidGeneration(u8),
    #[error("io operation failed: {0}")]
    Io(Arc<io::Error>),
    #[error("invalid json: {0}")]
    Json(Arc<serde_json::Error>),
    #[error("ron serialization failed: {0}")]
    Ron(Arc<ron::Error>),
    #[error("invalid ron: {0}")]
    RonSyntax(Arc<ron::error::SpannedError>),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_data() {
            return Self::Malformed(error.to_string());
        }

        Self::Json(Arc::new(error))
    }
}

impl From<ron::Error> for Error {
    fn from(error: ron::Error) -> Self {
        Self::Ron(Arc::new(error))
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(error: ron::error::SpannedError) -> Self {
        use ron::Error as Code;

        // RON parses by type, so a value of the wrong shape shows up as an
        // expectation failure rather than a data error
        match &error.code {
            Code::Message(_)
            | Code::InvalidValueForType { .. }
            | Code::ExpectedDifferentLength { .. }
            | Code::NoSuchEnumVariant { .. }
            | Code::NoSuchStructField { .. }
            | Code::MissingStructField { .. }
            | Code::DuplicateStructField { .. }
            | Code::IntegerOutOfBounds
            | Code::ExpectedInteger
            | Code::ExpectedFloat
            | Code::ExpectedBoolean
            | Code::ExpectedString
            | Code::ExpectedArray
            | Code::ExpectedMap
            | Code::ExpectedOption
            | Code::ExpectedUnit
            | Code::ExpectedStructLike => Self::Malformed(error.to_string()),
            _ => Self::RonSyntax(Arc::new(error)),
        }
    }
}

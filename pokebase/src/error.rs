use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] pokebase_core::Error),
    #[error("io operation failed: {0}")]
    Io(Arc<io::Error>),
    #[error("invalid json: {0}")]
    Json(Arc<serde_json::Error>),
    #[error("dex dump has no pokemon list")]
    MissingPokemon,
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        if error.is_data() {
            return Self::Database(pokebase_core::Error::Malformed(error.to_string()));
        }

        Self::Json(Arc::new(error))
    }
}

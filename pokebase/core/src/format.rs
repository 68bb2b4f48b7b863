use crate::Error;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::path::Path;

/// How a database is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub syntax: Syntax,
    pub compressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Syntax {
    #[default]
    Json,
    Ron,
}

impl Format {
    pub const JSON: Self = Self {
        syntax: Syntax::Json,
        compressed: false,
    };

    /// Picks a format from the extensions of a path.
    ///
    /// `.ron` files are RON, anything else is JSON. A trailing `.gz` means gzip.
    pub fn detect(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let compressed = path.extension().is_some_and(|extension| extension == "gz");
        let inner = if compressed {
            path.file_stem().map(Path::new).unwrap_or(path)
        } else {
            path
        };

        let syntax = match inner.extension().and_then(|extension| extension.to_str()) {
            Some("ron") => Syntax::Ron,
            _ => Syntax::Json,
        };

        Self { syntax, compressed }
    }

    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, Error> {
        let bytes = match self.syntax {
            Syntax::Json => serde_json::to_vec(value)?,
            Syntax::Ron => {
                ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?.into_bytes()
            }
        };

        if !self.compressed {
            return Ok(bytes);
        }

        use flate2::Compression;
        use flate2::write::GzEncoder;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&bytes)?;

        Ok(encoder.finish()?)
    }

    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, Error> {
        let decompressed;

        let bytes: &[u8] = if self.compressed {
            use flate2::read::GzDecoder;

            let mut buffer = Vec::new();
            let _ = GzDecoder::new(bytes).read_to_end(&mut buffer)?;

            decompressed = buffer;
            &decompressed
        } else {
            bytes
        };

        Ok(match self.syntax {
            Syntax::Json => serde_json::from_slice(bytes)?,
            Syntax::Ron => ron::de::from_bytes(bytes)?,
        })
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::JSON
    }
}

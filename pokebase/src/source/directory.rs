use crate::core::Generation;
use crate::dex;
use crate::source::Source;
use crate::Error;

use std::fs;
use std::path::{Path, PathBuf};

/// A [`Source`] reading dumps saved by a scraper into a directory.
///
/// Names are read from `names.json` and each generation from a file named
/// after its dex slug (e.g. `rb.json`).
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub const NAMES_FILE: &str = "names.json";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dex_path(&self, generation: Generation) -> PathBuf {
        self.root.join(generation.slug()).with_extension("json")
    }
}

impl Source for Directory {
    fn names(&mut self) -> Result<Vec<String>, Error> {
        let json = fs::read_to_string(self.root.join(Self::NAMES_FILE))?;

        Ok(serde_json::from_str(&json)?)
    }

    fn pokemon(&mut self, generation: Generation) -> Result<Vec<dex::Entry>, Error> {
        let path = self.dex_path(generation);
        log::debug!("Reading dex of {generation} from {}", path.display());

        dex::parse(&fs::read_to_string(path)?)
    }
}

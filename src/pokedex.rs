use crate::Config;
use crate::pokebase::{self, Database, Generation, Source};

use std::path::{Path, PathBuf};

/// A [`Database`] kept in the data directory of a [`Config`].
#[derive(Debug, Clone)]
pub struct Pokedex {
    database: Database,
    config: Config,
}

impl Pokedex {
    pub fn new(config: Config) -> Self {
        Self {
            database: Database::new(config.duplicates),
            config,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn database_mut(&mut self) -> &mut Database {
        &mut self.database
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn clone_generation(
        &mut self,
        generation: Generation,
        source: impl Source,
    ) -> Result<usize, anywho::Error> {
        log::info!("Cloning {generation}");

        Ok(pokebase::ingest(&mut self.database, generation, source)?)
    }

    /// Saves the database into the data directory, named after its generation.
    pub fn save(&self) -> Result<PathBuf, anywho::Error> {
        let path = self.path(self.database.generation());

        self.save_to(&path)?;

        Ok(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), anywho::Error> {
        Ok(self.database.save(path)?)
    }

    /// Loads a generation previously saved into the data directory.
    pub fn load(&mut self, generation: Generation) -> Result<usize, anywho::Error> {
        let count = self.load_from(self.path(Some(generation)))?;
        self.database.set_generation(generation);

        Ok(count)
    }

    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize, anywho::Error> {
        Ok(self.database.load(path)?)
    }

    pub fn path(&self, generation: Option<Generation>) -> PathBuf {
        let file_name = match generation {
            Some(generation) => format!("gen{}.json", generation.number()),
            None => format!("{}.json", env!("CARGO_PKG_NAME")),
        };

        self.config.data_dir().join(file_name)
    }
}

impl Default for Pokedex {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

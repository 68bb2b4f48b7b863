use crate::pokebase::Duplicates;

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub duplicates: Duplicates,
    pub debug: bool,
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub const DEBUG_VARIABLE: &str = "POKEDEX_DEBUG";

    pub fn load(path: impl AsRef<Path>) -> Result<Self, anywho::Error> {
        Ok(ron::from_str(&fs::read_to_string(path)?)?)
    }

    /// Loads the configuration of the user, if any.
    pub fn locate() -> Result<Self, anywho::Error> {
        Self::locate_at(
            Self::path().as_deref(),
            env::var_os(Self::DEBUG_VARIABLE).is_some(),
        )
    }

    /// The configuration file of the user, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        Some(
            dirs::config_dir()?
                .join(env!("CARGO_PKG_NAME"))
                .join("config.ron"),
        )
    }

    fn locate_at(path: Option<&Path>, debug: bool) -> Result<Self, anywho::Error> {
        let mut config = match path {
            Some(path) if fs::exists(path)? => Self::load(path)?,
            _ => Self::default(),
        };

        config.debug |= debug;

        Ok(config)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_default()
                .join(env!("CARGO_PKG_NAME"))
        })
    }
}

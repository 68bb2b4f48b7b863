//! Raw Pokémon entries, as embedded in the dex pages of a generation.
use crate::core::pokemon::Stats;
use crate::core::{Names, Pokemon};
use crate::Error;

use serde::Deserialize;

/// A species entry of a dex page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub genfamily: Vec<String>,
    pub alts: Vec<Stats>,
    #[serde(default)]
    pub evos: Vec<String>,
}

impl Entry {
    /// Turns the entry into a [`Pokemon`], resolving its id with the given names.
    ///
    /// Only the first alternative of the entry is kept.
    pub fn into_pokemon(self, names: &Names) -> Result<Pokemon, Error> {
        let malformed = |reason: &str| {
            crate::core::Error::Malformed(format!("{name}: {reason}", name = self.name))
        };

        let mut stats = self
            .alts
            .first()
            .cloned()
            .ok_or_else(|| malformed("no alternatives"))?;

        let types = stats
            .remove("types")
            .ok_or_else(|| malformed("no types"))
            .and_then(|types| {
                serde_json::from_value::<Vec<String>>(types)
                    .map_err(|_| malformed("types are not a list of names"))
            })?;

        for key in Pokemon::NON_STATS {
            let _ = stats.remove(*key);
        }

        let id = names.resolve(&self.name)?;

        Ok(Pokemon {
            name: self.name,
            id,
            image: String::new(),
            generations: self.genfamily,
            types,
            stats,
            evolutions: self.evos,
        })
    }
}

/// Extracts the entries of a dex dump.
///
/// A dump is either the list of entries itself or the settings object of a
/// dex page, which holds the list under `injectRpcs[1][1].pokemon`.
pub fn parse(json: &str) -> Result<Vec<Entry>, Error> {
    let mut dump: serde_json::Value = serde_json::from_str(json.trim())?;

    let pokemon = if dump.is_array() {
        dump
    } else {
        dump.pointer_mut("/injectRpcs/1/1/pokemon")
            .map(serde_json::Value::take)
            .ok_or(Error::MissingPokemon)?
    };

    Ok(serde_json::from_value(pokemon)?)
}

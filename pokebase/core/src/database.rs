use crate::pokemon;
use crate::{Error, Format, Generation, Pokemon};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// An in-memory Pokédex, indexed by id and by name.
///
/// Every name in the database points to the id holding a form with that name,
/// and every form is reachable through its name.
#[derive(Clone, Default)]
pub struct Database {
    pokemon: IndexMap<pokemon::Id, Vec<Pokemon>>,
    names: BTreeMap<String, pokemon::Id>,
    generation: Option<Generation>,
    duplicates: Duplicates,
}

/// What to do when inserting a name that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duplicates {
    #[default]
    Reject,
    Replace,
}

impl Database {
    pub fn new(duplicates: Duplicates) -> Self {
        Self {
            duplicates,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, pokemon: Pokemon) -> Result<(), Error> {
        if self.names.contains_key(&pokemon.name) {
            match self.duplicates {
                Duplicates::Reject => return Err(Error::DuplicateName(pokemon.name)),
                Duplicates::Replace => {
                    log::warn!("Replacing {pokemon}");

                    // Same species: swap the form in place to keep persistence order
                    if self.names.get(&pokemon.name) == Some(&pokemon.id) {
                        if let Some(form) = self.pokemon.get_mut(&pokemon.id).and_then(|forms| {
                            forms.iter_mut().find(|form| form.name == pokemon.name)
                        }) {
                            *form = pokemon;

                            return Ok(());
                        }
                    }

                    let _ = self.remove_by_name(&pokemon.name)?;
                }
            }
        }

        let _ = self.names.insert(pokemon.name.clone(), pokemon.id);
        self.pokemon.entry(pokemon.id).or_default().push(pokemon);

        Ok(())
    }

    /// Inserts every given Pokémon, or none of them.
    pub fn insert_all(
        &mut self,
        pokemon: impl IntoIterator<Item = Pokemon>,
    ) -> Result<usize, Error> {
        let mut staged = self.clone();
        let mut count = 0;

        for pokemon in pokemon {
            staged.insert(pokemon)?;
            count += 1;
        }

        *self = staged;

        Ok(count)
    }

    /// Removes all the forms of a species.
    pub fn remove_by_id(&mut self, id: pokemon::Id) -> Result<Vec<Pokemon>, Error> {
        let forms = self
            .pokemon
            .shift_remove(&id)
            .ok_or(Error::IdNotFound(id))?;

        for pokemon in &forms {
            let _ = self.names.remove(&pokemon.name);
        }

        Ok(forms)
    }

    /// Removes a single form, leaving the other forms of its species untouched.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Pokemon, Error> {
        let id = *self
            .names
            .get(name)
            .ok_or_else(|| Error::NameNotFound(name.to_owned()))?;

        let inconsistent = || Error::Inconsistent {
            name: name.to_owned(),
            id,
        };

        let forms = self.pokemon.get_mut(&id).ok_or_else(inconsistent)?;
        let index = forms
            .iter()
            .position(|pokemon| pokemon.name == name)
            .ok_or_else(inconsistent)?;

        let pokemon = forms.remove(index);

        if forms.is_empty() {
            let _ = self.pokemon.shift_remove(&id);
        }

        let _ = self.names.remove(name);

        Ok(pokemon)
    }

    pub fn clear(&mut self) {
        self.pokemon.clear();
        self.names.clear();
    }

    /// Returns all the forms of a species, in insertion order.
    pub fn get_by_id(&self, id: pokemon::Id) -> Result<&[Pokemon], Error> {
        self.pokemon
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(Error::IdNotFound(id))
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Pokemon> {
        let id = self.names.get(name)?;

        self.pokemon
            .get(id)?
            .iter()
            .find(|pokemon| pokemon.name == name)
    }

    /// The amount of forms in the database.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = pokemon::Id> + '_ {
        self.pokemon.keys().copied()
    }

    /// Iterates over every form, species by species, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.values().flatten()
    }

    pub fn generation(&self) -> Option<Generation> {
        self.generation
    }

    pub fn set_generation(&mut self, generation: Generation) {
        self.generation = Some(generation);
    }

    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// Writes the database to a file, replacing it only once fully written.
    ///
    /// The format is picked with [`Format::detect`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        log::debug!("Saving pokemon to file {}", path.display());

        let pokemon: Vec<&Pokemon> = self.iter().collect();
        let bytes = Format::detect(path).encode(&pokemon)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut temporary = path.as_os_str().to_owned();
        temporary.push(".tmp");

        fs::write(&temporary, bytes)?;

        if let Err(error) = fs::rename(&temporary, path) {
            let _ = fs::remove_file(&temporary);

            return Err(error.into());
        }

        log::debug!("Saved {} pokemon", pokemon.len());

        Ok(())
    }

    /// Reads a file written by [`Database::save`] into the database.
    ///
    /// Either every Pokémon in the file is inserted, or none is.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, Error> {
        let path = path.as_ref();
        log::debug!("Loading pokemon from file {}", path.display());

        let start = Instant::now();
        let bytes = fs::read(path)?;
        let pokemon: Vec<Pokemon> = Format::detect(path).decode(&bytes)?;

        let count = self.insert_all(pokemon)?;

        log::info!(
            "Loaded {count} pokemon in {:.3} seconds",
            start.elapsed().as_secs_f64()
        );

        Ok(count)
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("species", &self.pokemon.len())
            .field("pokemon", &self.names.len())
            .field("generation", &self.generation)
            .field("duplicates", &self.duplicates)
            .finish()
    }
}

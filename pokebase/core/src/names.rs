use crate::pokemon;
use crate::Error;

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The canonical list of species names, in national dex order.
///
/// The position of a name in the list determines its [`pokemon::Id`].
#[derive(Debug, Clone, Default)]
pub struct Names {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Names {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(names.len());

        for (i, name) in names.iter().enumerate() {
            let _ = positions.entry(name.clone()).or_insert(i);
        }

        Self { names, positions }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, id: pokemon::Id) -> Option<&str> {
        self.names.get(id.position()).map(String::as_str)
    }

    /// Finds the id of a name present in the list as is.
    pub fn position(&self, name: &str) -> Option<pokemon::Id> {
        self.positions
            .get(name)
            .copied()
            .map(pokemon::Id::from_position)
    }

    /// Determines the id of a scraped name.
    ///
    /// Forms missing from the list, like `Deoxys-Attack`, resolve to their base
    /// species by dropping everything from the first hyphen onwards. Only names
    /// starting with a word followed by a hyphen are considered forms.
    pub fn resolve(&self, name: &str) -> Result<pokemon::Id, Error> {
        static FORM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+-").unwrap());

        if let Some(id) = self.position(name) {
            return Ok(id);
        }

        if FORM.is_match(name) {
            let base = name.split('-').next().unwrap_or(name);

            if let Some(id) = self.position(base) {
                log::debug!("Resolved form {name} as {base} ({id})");

                return Ok(id);
            }
        }

        Err(Error::Unresolved(name.to_owned()))
    }
}

impl<S: Into<String>> FromIterator<S> for Names {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn names() -> Names {
        Names::from_iter([
            "Bulbasaur",
            "Ivysaur",
            "Venusaur",
            "Charmander",
            "Deoxys",
            "Pikachu",
            "Ho-Oh",
            "Nidoran-F",
        ])
    }

    #[test]
    fn resolves_exact_names() {
        let names = names();

        assert_eq!(names.resolve("Bulbasaur").unwrap().number(), 1);
        assert_eq!(names.resolve("Pikachu").unwrap().number(), 6);
        assert_eq!(names.resolve("Ho-Oh").unwrap().number(), 7);
        assert_eq!(names.resolve("Nidoran-F").unwrap().number(), 8);
    }

    #[test]
    fn resolves_forms_to_base_species() {
        let names = names();

        assert_eq!(names.resolve("Deoxys-Attack").unwrap().number(), 5);
        assert_eq!(names.resolve("Pikachu-Alola-Cap").unwrap().number(), 6);
    }

    #[test]
    fn fails_when_base_species_is_unknown() {
        let names = names();

        assert_matches!(
            names.resolve("Nonexistent-Form"),
            Err(Error::Unresolved(name)) if name == "Nonexistent-Form"
        );
        assert_matches!(names.resolve("Mewtwo"), Err(Error::Unresolved(_)));
        assert_matches!(names.resolve("-Attack"), Err(Error::Unresolved(_)));
    }

    #[test]
    fn only_hyphenated_prefixes_are_forms() {
        let names = Names::from_iter(["Mr", "Mime"]);

        assert_matches!(names.resolve("Mr. Mime-Galar"), Err(Error::Unresolved(_)));
    }

    #[test]
    fn first_occurrence_wins() {
        let names = Names::from_iter(["Missingno", "Bulbasaur", "Missingno"]);

        assert_eq!(names.position("Missingno").map(pokemon::Id::number), Some(1));
        assert_eq!(names.get(pokemon::Id::from_position(2)), Some("Missingno"));
        assert_eq!(names.len(), 3);
    }
}

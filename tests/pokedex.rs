use pokedex::pokebase::source::Directory;
use pokedex::pokebase::{Duplicates, Generation, pokemon};
use pokedex::{Config, Pokedex, logging};

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const NAMES: &str = r#"["Bulbasaur", "Ivysaur", "Venusaur", "Chikorita"]"#;

const GS: &str = r#"[
    { "name": "Chikorita", "genfamily": ["GS"], "alts": [{ "types": ["Grass"], "hp": 45 }], "evos": [] },
    { "name": "Venusaur", "genfamily": ["RB", "GS"], "alts": [{ "types": ["Grass", "Poison"], "hp": 80 }], "evos": [] },
    { "name": "Venusaur-Mega", "genfamily": ["XY"], "alts": [{ "types": ["Grass", "Poison"], "hp": 80 }], "evos": [] }
]"#;

fn source(root: &Path) -> Directory {
    let dumps = root.join("dumps");
    fs::create_dir_all(&dumps).unwrap();
    fs::write(dumps.join("names.json"), NAMES).unwrap();
    fs::write(dumps.join("gs.json"), GS).unwrap();

    Directory::new(dumps)
}

fn config(root: &Path) -> Config {
    Config {
        data_dir: Some(root.join("data")),
        debug: true,
        ..Config::default()
    }
}

fn pairs(pokedex: &Pokedex) -> BTreeSet<(u32, String)> {
    pokedex
        .database()
        .iter()
        .map(|pokemon| (pokemon.id.number(), pokemon.name.clone()))
        .collect()
}

#[test]
fn clones_saves_and_loads_a_generation() {
    let directory = tempfile::tempdir().unwrap();
    let config = config(directory.path());
    logging::init(config.debug);

    let gs = Generation::new(2).unwrap();

    let mut pokedex = Pokedex::new(config.clone());
    assert_eq!(pokedex.clone_generation(gs, source(directory.path())).unwrap(), 3);

    let path = pokedex.save().unwrap();
    assert_eq!(path, directory.path().join("data").join("gen2.json"));

    let mut loaded = Pokedex::new(config);
    assert_eq!(loaded.load(gs).unwrap(), 3);

    assert_eq!(pairs(&loaded), pairs(&pokedex));
    assert_eq!(loaded.database().generation(), Some(gs));

    let venusaur = pokemon::Id::new(3).unwrap();
    assert_eq!(loaded.database().get_by_id(venusaur).unwrap().len(), 2);
}

#[test]
fn saves_without_generation_under_a_default_name() {
    let directory = tempfile::tempdir().unwrap();
    let pokedex = Pokedex::new(config(directory.path()));

    let path = pokedex.save().unwrap();

    assert_eq!(path.file_name().unwrap(), "pokedex.json");
    assert_eq!(fs::read_to_string(path).unwrap(), "[]");
}

#[test]
fn honors_duplicate_policy() {
    let directory = tempfile::tempdir().unwrap();
    let gs = Generation::new(2).unwrap();

    let mut rejecting = Pokedex::new(config(directory.path()));
    let _ = rejecting.clone_generation(gs, source(directory.path())).unwrap();
    assert_matches!(rejecting.clone_generation(gs, source(directory.path())), Err(_));
    assert_eq!(rejecting.database().len(), 3);

    let mut replacing = Pokedex::new(Config {
        duplicates: Duplicates::Replace,
        ..config(directory.path())
    });
    let _ = replacing.clone_generation(gs, source(directory.path())).unwrap();
    let _ = replacing.clone_generation(gs, source(directory.path())).unwrap();
    assert_eq!(pairs(&replacing), pairs(&rejecting));
}

#[test]
fn logging_can_be_initialized_twice() {
    logging::init(false);
    logging::init(true);
}

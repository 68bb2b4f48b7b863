use crate::canonical;
use crate::core::{Database, Generation};
use crate::source::Source;
use crate::Error;

use std::time::Instant;

/// Scrapes a generation from the given source into the database.
///
/// Every entry must resolve to a canonical id; a single failure aborts the
/// whole generation and leaves the database untouched. Returns the amount of
/// Pokémon added.
pub fn ingest(
    database: &mut Database,
    generation: Generation,
    mut source: impl Source,
) -> Result<usize, Error> {
    let start = Instant::now();
    log::debug!("Extracting Pokemon from {generation}");

    let names = canonical::names(source.names()?);

    log::debug!("Loaded {} canonical names", names.len());

    let entries = source.pokemon(generation)?;
    let total = entries.len();

    let pokemon = entries
        .into_iter()
        .map(|entry| entry.into_pokemon(&names))
        .collect::<Result<Vec<_>, _>>()?;

    let count = database.insert_all(pokemon)?;
    database.set_generation(generation);

    log::info!(
        "Finished extracting {count} of {total} pokemon in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );

    Ok(count)
}

mod directory;

pub use directory::Directory;

use crate::core::Generation;
use crate::dex;
use crate::Error;

/// Where scraped Pokémon come from.
///
/// Each list is pulled once per ingestion.
pub trait Source {
    /// The canonical species names, in national dex order.
    ///
    /// Names may be returned as published; they are normalized on ingestion.
    fn names(&mut self) -> Result<Vec<String>, Error>;

    /// The dex entries of a generation.
    fn pokemon(&mut self, generation: Generation) -> Result<Vec<dex::Entry>, Error>;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn names(&mut self) -> Result<Vec<String>, Error> {
        (**self).names()
    }

    fn pokemon(&mut self, generation: Generation) -> Result<Vec<dex::Entry>, Error> {
        (**self).pokemon(generation)
    }
}

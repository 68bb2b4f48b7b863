pub use pokebase_core as core;

pub mod canonical;
pub mod dex;
pub mod source;

mod error;
mod ingest;

pub use crate::core::pokemon;
pub use crate::core::{Database, Duplicates, Format, Generation, Names, Pokemon};
pub use error::Error;
pub use ingest::ingest;
pub use source::Source;

pub use pokebase;

pub mod logging;

mod config;
mod pokedex;

pub use config::Config;
pub use pokedex::Pokedex;

mod database;
mod error;
mod format;
mod generation;
mod names;

pub mod pokemon;

pub use database::{Database, Duplicates};
pub use error::Error;
pub use format::{Format, Syntax};
pub use generation::Generation;
pub use names::Names;
pub use pokemon::Pokemon;

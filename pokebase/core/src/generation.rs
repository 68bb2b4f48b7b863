use crate::Error;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A main series generation with a dex of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Generation(u8);

impl Generation {
    pub const FIRST: Self = Self(1);
    pub const LATEST: Self = Self(7);

    pub fn new(number: u8) -> Result<Self, Error> {
        if !(Self::FIRST.0..=Self::LATEST.0).contains(&number) {
            return Err(Error::InvalidGeneration(number));
        }

        Ok(Self(number))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST.0..=Self::LATEST.0).map(Self)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// The short name of the generation's dex, named after its first games.
    pub fn slug(self) -> &'static str {
        match self.0 {
            1 => "rb",
            2 => "gs",
            3 => "rs",
            4 => "dp",
            5 => "bw",
            6 => "xy",
            _ => "sm",
        }
    }

    pub fn games(self) -> &'static str {
        match self.0 {
            1 => "Red/Blue",
            2 => "Gold/Silver",
            3 => "Ruby/Sapphire",
            4 => "Diamond/Pearl",
            5 => "Black/White",
            6 => "X/Y",
            _ => "Sun/Moon",
        }
    }
}

impl TryFrom<u8> for Generation {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Generation> for u8 {
    fn from(generation: Generation) -> Self {
        generation.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation {} (Pkm {})", self.0, self.games())
    }
}

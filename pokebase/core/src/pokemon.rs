use crate::Error;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single Pokémon, as scraped from a dex for one of its forms.
///
/// Regional and alternate forms are separate records sharing the same [`Id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pokemon {
    pub name: String,
    pub id: Id,
    #[serde(rename = "imgSrc")]
    pub image: String,
    pub generations: Vec<String>,
    pub types: Vec<String>,
    pub stats: Stats,
    pub evolutions: Vec<String>,
}

/// Stat name to value, as found in the dex.
pub type Stats = BTreeMap<String, serde_json::Value>;

impl Pokemon {
    /// Keys of a dex form that are captured elsewhere and never kept as stats.
    pub const NON_STATS: &[&str] = &["types", "abilities", "formats"];
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// The national dex number of a species. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn new(number: u32) -> Option<Self> {
        if number == 0 {
            return None;
        }

        Some(Self(number))
    }

    pub(crate) fn from_position(position: usize) -> Self {
        Self(position as u32 + 1)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub(crate) fn position(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u32> for Id {
    type Error = Error;

    fn try_from(number: u32) -> Result<Self, Error> {
        Self::new(number).ok_or_else(|| Error::Malformed("pokemon ids start at 1".to_owned()))
    }
}

impl From<Id> for u32 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:0>3}", self.0)
    }
}

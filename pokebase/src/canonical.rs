//! The canonical list of species names, in national dex order.
use crate::core::Names;

/// Normalizes a canonical name to the spelling used by dex pages.
pub fn normalize(name: &str) -> String {
    name.replace('\u{2019}', "'")
        .replace('\u{2640}', "-F")
        .replace('\u{2642}', "-M")
        .trim()
        .to_owned()
}

/// Normalizes a list of names published in national dex order.
pub fn names(names: impl IntoIterator<Item = impl AsRef<str>>) -> Names {
    names
        .into_iter()
        .map(|name| normalize(name.as_ref()))
        .collect()
}

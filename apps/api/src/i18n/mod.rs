//! Translation lookup over static, process-wide tables.
//!
//! Resolution order: requested language, then English, then the key itself.
//! Lookup never fails.

pub mod handlers;
mod tables;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Te,
    Hi,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    /// Parses a language code, tolerating case and region tags (`te-IN`).
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code.trim().to_ascii_lowercase();
        match lang.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Language::En),
            "te" => Some(Language::Te),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => tables::EN,
            Language::Te => tables::TE,
            Language::Hi => tables::HI,
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

fn table(lang: Language) -> &'static Table {
    static TABLES: OnceLock<HashMap<Language, Table>> = OnceLock::new();
    let tables = TABLES.get_or_init(|| {
        [Language::En, Language::Te, Language::Hi]
            .into_iter()
            .map(|l| (l, l.entries().iter().copied().collect()))
            .collect()
    });
    &tables[&lang]
}

/// Looks up `key` for `lang`. Unsupported codes behave like English.
pub fn get_translation<'a>(lang: &str, key: &'a str) -> &'a str {
    let lang = Language::from_code(lang).unwrap_or(Language::DEFAULT);
    table(lang)
        .get(key)
        .or_else(|| table(Language::DEFAULT).get(key))
        .copied()
        .unwrap_or(key)
}

/// The full English table overlaid with `lang`'s own entries.
pub fn translations_for(lang: Language) -> BTreeMap<&'static str, &'static str> {
    let mut merged: BTreeMap<_, _> = table(Language::DEFAULT)
        .iter()
        .map(|(k, v)| (*k, *v))
        .collect();
    merged.extend(table(lang).iter().map(|(k, v)| (*k, *v)));
    merged
}

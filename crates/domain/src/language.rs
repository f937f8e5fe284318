//! Languages and per-language text.
//!
//! Collection records carry their titles, dates and creators once per
//! language. Only Dutch and English are recognised; every other language
//! tag collapses into [`Language::Unknown`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Language of a piece of text in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Dutch (`nl`).
    Dutch,
    /// English (`en`).
    English,
    /// Any language that is not recognised, including a missing tag.
    Unknown,
}

/// Text available in one or more languages.
///
/// Holds at most one value per [`Language`] and never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText {
    values: BTreeMap<Language, String>,
}

impl LocalizedText {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builds a mapping from `(language, text)` pairs.
    ///
    /// The first value seen for a language is kept; later duplicates and
    /// empty strings are ignored.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        let mut text = Self::new();
        for (language, value) in entries {
            text.insert_if_absent(language, value);
        }
        text
    }

    /// Inserts `value` for `language` unless that language already has one.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, language: Language, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || self.values.contains_key(&language) {
            return false;
        }
        self.values.insert(language, value);
        true
    }

    /// Returns the text for `language`, if present.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        self.values.get(&language).map(String::as_str)
    }

    /// Returns true if no language has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of languages with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over `(language, text)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        self.values.iter().map(|(l, v)| (*l, v.as_str()))
    }
}

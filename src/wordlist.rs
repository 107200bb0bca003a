use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default catalog compiled into the binary, used when no seed file is given.
const EMBEDDED_CATALOG: &str = include_str!("../data/words.json");

/// Category name to word list, as read from the seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct WordCatalog {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordCatalog {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("word catalog must map category names to word lists")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read word catalog {}", path.display()))?;

        Self::from_json(&text)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load `path` if given, the embedded catalog otherwise.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    /// Every (category, word) pair with surrounding whitespace trimmed and
    /// blank words dropped.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(|(category, words)| {
            words
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .map(move |w| (category.as_str(), w))
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

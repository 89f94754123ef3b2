//! Key → text catalog
//!
//! Keys are the English source strings. A missing or empty translation
//! falls back to the key itself.

use std::collections::HashMap;
use std::path::Path;

use crate::core::Result;
use crate::update::Localizer;

/// Translations for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    language: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(language: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            entries,
        }
    }

    /// Catalog that returns every key unchanged
    pub fn identity() -> Self {
        Self::new("en", HashMap::new())
    }

    /// Parse a flat JSON object of key/translation pairs
    pub fn from_json(language: impl Into<String>, json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::new(language, entries))
    }

    /// Load a catalog file; the language is taken from the file stem
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let language = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("en")
            .to_string();
        let catalog = Self::from_json(language, &content)?;
        tracing::info!(
            language = %catalog.language,
            entries = catalog.len(),
            "Loaded string catalog"
        );
        Ok(catalog)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl Localizer for Catalog {
    fn t(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => key.to_string(),
        }
    }
}

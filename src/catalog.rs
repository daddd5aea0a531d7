//! API catalog: tool-specific TCL commands mapped to SKILL documentation snippets.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ResourceError;

/// A catalog value is either a single snippet or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSnippets {
    One(String),
    Many(Vec<String>),
}

impl From<RawSnippets> for Vec<String> {
    fn from(raw: RawSnippets) -> Self {
        match raw {
            RawSnippets::One(s) => vec![s],
            RawSnippets::Many(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEntry {
    pub name: String,
    pub snippets: Vec<String>,
}

/// Immutable, ordered view of the API catalog file.
///
/// Iteration order is the key order of the source JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCatalog {
    entries: Vec<ApiEntry>,
}

impl ApiCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ResourceError::unreadable("API catalog", path, e))?;
        let catalog = Self::from_json(&content).map_err(|source| ResourceError::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} API catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        // serde_json's preserve_order keeps the map in document order
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(map.len());
        for (name, value) in map {
            let raw: RawSnippets = serde_json::from_value(value)?;
            entries.push(ApiEntry {
                name,
                snippets: raw.into(),
            });
        }
        Ok(Self { entries })
    }

    pub fn from_entries<I, K, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<S>)>,
        K: Into<String>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (name, snippets) in entries {
            let name = name.into();
            let snippets = snippets.into_iter().map(Into::into).collect();
            match catalog.entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.snippets = snippets,
                None => catalog.entries.push(ApiEntry { name, snippets }),
            }
        }
        catalog
    }

    pub fn entries(&self) -> &[ApiEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.snippets.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

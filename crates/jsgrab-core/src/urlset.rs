//! Deduplicated JS URL set, persisted as a one-URL-per-line text list.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::PipelineError;

/// Set of absolute URL strings classified as JavaScript.
///
/// Comparison is on the exact string, so URLs differing only in case stay
/// distinct. Iteration is lexicographic, which is also the serialized order
/// of the list file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JsUrlSet(BTreeSet<String>);

impl JsUrlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL. Returns true if it was not already present.
    pub fn insert(&mut self, url: String) -> bool {
        self.0.insert(url)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.0.contains(url)
    }

    /// URLs in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Writes the list file: UTF-8, one URL per line, lexicographic order.
    ///
    /// This file is the hand-off artifact between extraction and fetch and
    /// stays human-editable.
    pub fn write_to(&self, path: &Path) -> Result<(), PipelineError> {
        let mut out = String::new();
        for url in &self.0 {
            out.push_str(url);
            out.push('\n');
        }
        std::fs::write(path, out).map_err(|source| PipelineError::Persistence {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a previously written (possibly hand-edited) list. Blank lines
    /// and surrounding whitespace are tolerated.
    pub fn read_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read URL list: {}", path.display()))?;
        let mut set = JsUrlSet::new();
        for line in data.lines() {
            let line = line.trim();
            if !line.is_empty() {
                set.insert(line.to_string());
            }
        }
        Ok(set)
    }
}

impl FromIterator<String> for JsUrlSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        JsUrlSet(iter.into_iter().collect())
    }
}

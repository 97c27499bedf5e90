//! In-memory text buffer implementing the host traits.
//!
//! `TextDocument` is the adapter used by the CLI and by tests: a named
//! plain-text buffer with regex search. Editor integrations with their own
//! buffer APIs implement [`ActiveView`]/[`WordSource`] directly instead.

use crate::host::{ActiveView, Match, WordSource};
use crate::words;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

/// A named plain-text buffer
#[derive(Debug, Clone)]
pub struct TextDocument {
    name: String,
    text: String,
}

impl TextDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a document from disk; the path becomes its name
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::new(path.to_string_lossy(), text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn compile(&self, pattern: &str) -> Option<Regex> {
        match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                log::debug!("rejecting search pattern {pattern:?}: {e}");
                None
            }
        }
    }
}

impl ActiveView for TextDocument {
    /// Words matching `prefix`, nearest to `location` first when a cursor
    /// offset is given, in document order otherwise.
    fn extract_completions(&self, prefix: &str, location: Option<usize>) -> Vec<String> {
        let mut hits: Vec<(usize, &str)> = words::word_spans(&self.text)
            .filter(|(_, w)| w.starts_with(prefix))
            .collect();

        if let Some(point) = location {
            hits.sort_by_key(|(start, _)| start.abs_diff(point));
        }

        let mut out: Vec<String> = Vec::new();
        for (_, word) in hits {
            if !out.iter().any(|seen| seen == word) {
                out.push(word.to_string());
            }
        }
        out
    }

    fn find_first(&self, pattern: &str) -> Match {
        match self.compile(pattern) {
            Some(re) => re
                .find(&self.text)
                .map(|m| Match::found(m.start(), m.end()))
                .unwrap_or_else(Match::none),
            None => Match::none(),
        }
    }

    fn find_all(&self, pattern: &str) -> Vec<String> {
        match self.compile(pattern) {
            Some(re) => re
                .find_iter(&self.text)
                .map(|m| m.as_str().to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl WordSource for TextDocument {
    fn label(&self) -> &str {
        &self.name
    }

    fn extract_words(&self, prefix: &str) -> Vec<String> {
        self.extract_completions(prefix, None)
    }
}

//! Core types for project-autocomplete

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A word together with the source it was extracted from.
///
/// An empty origin marks the active view; anything else is the path or
/// label of another source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    /// The token itself
    pub word: String,
    /// Where it came from (empty for the active view)
    pub origin: String,
}

impl CandidateWord {
    /// Candidate from the active view
    pub fn active(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            origin: String::new(),
        }
    }

    /// Candidate from another source
    pub fn from_source(word: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            origin: origin.into(),
        }
    }

    /// Whether this candidate came from the active view
    pub fn is_active(&self) -> bool {
        self.origin.is_empty()
    }
}

/// A completion surfaced to the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    /// Display text; carries a tab-separated origin annotation for
    /// candidates that came from another file
    pub trigger: String,
    /// Text inserted on selection, with snippet metacharacters escaped
    pub contents: String,
}

impl CompletionEntry {
    /// Build the entry for a candidate word.
    ///
    /// `$` has field semantics in snippet insertion, so it is escaped in
    /// the inserted text but left alone in the display trigger.
    pub fn from_candidate(candidate: &CandidateWord) -> Self {
        let contents = candidate.word.replace('$', "\\$");
        let mut trigger = candidate.word.clone();
        if !candidate.origin.is_empty() {
            trigger.push_str(&format!("\t({})", basename(&candidate.origin)));
        }
        Self { trigger, contents }
    }
}

/// Final path component of an origin label, for compact display
fn basename(origin: &str) -> String {
    Path::new(origin)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| origin.to_string())
}

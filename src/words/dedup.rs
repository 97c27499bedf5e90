//! First-seen-wins deduplication across sources

use crate::types::CandidateWord;
use std::collections::HashSet;

/// Keep one candidate per distinct word, the earliest occurrence, so a
/// word found in the active view is never re-attributed to another file.
pub fn without_duplicates(words: Vec<CandidateWord>) -> Vec<CandidateWord> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|c| seen.insert(c.word.clone()))
        .collect()
}

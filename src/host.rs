//! Seam between the engine and the host editor.
//!
//! The engine never touches buffers or files directly; it talks to an
//! [`ActiveView`] for the document being edited and to [`WordSource`]s for
//! everything else. `TextDocument` implements both for callers that do not
//! have a richer host, and hosts with their own buffer APIs can adapt them
//! behind these traits.

/// Result of a first-match search over a document buffer.
///
/// Host search APIs disagree on how "no match" is reported; this type
/// answers the question once, through [`Match::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    region: Option<(usize, usize)>,
}

impl Match {
    /// A match covering the byte range `start..end`
    pub fn found(start: usize, end: usize) -> Self {
        Self {
            region: Some((start, end)),
        }
    }

    /// The no-match result
    pub fn none() -> Self {
        Self { region: None }
    }

    /// True when the search found nothing
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
    }

    /// Byte range of the match, if any
    pub fn region(&self) -> Option<(usize, usize)> {
        self.region
    }
}

/// The document being edited, as the host exposes it.
pub trait ActiveView {
    /// The host's word-extraction primitive: words in the buffer matching
    /// `prefix`, ordered by relevance to `location` when one is given.
    ///
    /// Some hosts return tokens truncated by one trailing character; the
    /// engine repairs those with the search methods below.
    fn extract_completions(&self, prefix: &str, location: Option<usize>) -> Vec<String>;

    /// First match of the regex `pattern` from the start of the buffer
    fn find_first(&self, pattern: &str) -> Match;

    /// All non-overlapping matches of the regex `pattern`, materialized
    /// as the matched text
    fn find_all(&self, pattern: &str) -> Vec<String>;
}

/// Any other place words can come from: another open document, a project
/// file, an index.
pub trait WordSource {
    /// Origin label attached to words from this source
    fn label(&self) -> &str;

    /// Words in this source matching `prefix`
    fn extract_words(&self, prefix: &str) -> Vec<String>;
}

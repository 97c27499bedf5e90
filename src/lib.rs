//! project-autocomplete: cross-file word completion
//!
//! Editors usually complete words from the buffer being edited and nothing
//! else. This library widens the net: it aggregates candidate words from
//! the active view, other open documents, and project-configured folders,
//! with the active view's words listed first. Along the way it bounds the
//! work per source, repairs a known host defect that truncates extracted
//! words by one character, and deduplicates so each word is offered once.
//!
//! # Example
//!
//! ```
//! use project_autocomplete::{AutocompleteEngine, TextDocument, WordSource};
//!
//! let view = TextDocument::new("main.rs", "fn compute_totals() { compute_taxes(); }");
//! let other = TextDocument::new("lib.rs", "fn compute_shipping() {}");
//!
//! let engine = AutocompleteEngine::new();
//! let sources: Vec<&dyn WordSource> = vec![&other];
//! let completions = engine.complete(&view, "comp", &[], &sources);
//!
//! assert_eq!(completions[0].contents, "compute_totals");
//! assert!(completions.iter().any(|c| c.trigger.ends_with("(lib.rs)")));
//! ```

mod config;
mod document;
mod host;
mod project;
mod types;
mod words;

pub use config::EngineConfig;
pub use document::TextDocument;
pub use host::{ActiveView, Match, WordSource};
pub use project::{load_project, project_sources, FileSource, FolderEntry, ProjectData, ProjectError};
pub use types::{CandidateWord, CompletionEntry};
pub use words::{filter_words, fix_truncation, tokenize, without_duplicates};

/// Completion aggregation engine.
///
/// Stateless apart from its configuration: every call to
/// [`complete`](Self::complete) starts from scratch, so one engine can
/// serve any number of requests.
pub struct AutocompleteEngine {
    config: EngineConfig,
}

impl Default for AutocompleteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteEngine {
    /// Engine with the production bounds
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Engine with custom bounds
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Aggregate completions for `prefix` across the active view and the
    /// given sources.
    ///
    /// `locations` are cursor offsets in the active view; only the first
    /// is forwarded to the host extractor, which uses it to put nearby
    /// words first. Active-view words lead the result, then each source in
    /// order, and the first occurrence of a word claims it.
    pub fn complete(
        &self,
        view: &dyn ActiveView,
        prefix: &str,
        locations: &[usize],
        sources: &[&dyn WordSource],
    ) -> Vec<CompletionEntry> {
        let mut candidates = self.words_from_view(view, prefix, locations);
        candidates.extend(self.words_from_sources(prefix, sources));

        without_duplicates(candidates)
            .iter()
            .map(CompletionEntry::from_candidate)
            .collect()
    }

    /// Active-view words: extract, filter, repair truncation
    fn words_from_view(
        &self,
        view: &dyn ActiveView,
        prefix: &str,
        locations: &[usize],
    ) -> Vec<CandidateWord> {
        let raw = view.extract_completions(prefix, locations.first().copied());
        let filtered = filter_words(raw, &self.config);
        let fixed = fix_truncation(view, filtered, self.config.max_fix_time());
        fixed.into_iter().map(CandidateWord::active).collect()
    }

    /// Other-source words: extract and filter only.
    ///
    /// Repair needs to search the source's own buffer, which is only
    /// cheaply available for the active view, so these pass unrepaired.
    fn words_from_sources(
        &self,
        prefix: &str,
        sources: &[&dyn WordSource],
    ) -> Vec<CandidateWord> {
        let mut candidates = Vec::new();
        for source in sources.iter().take(self.config.max_files) {
            let filtered = filter_words(source.extract_words(prefix), &self.config);
            candidates.extend(
                filtered
                    .into_iter()
                    .map(|w| CandidateWord::from_source(w, source.label())),
            );
        }
        candidates
    }
}

//! Word pipeline: tokenize, filter, repair, dedup

mod dedup;
mod filter;
mod repair;

pub use dedup::without_duplicates;
pub use filter::filter_words;
pub use repair::fix_truncation;

use once_cell::sync::Lazy;
use regex::Regex;

/// The crate-wide word definition. The repair patterns in
/// [`repair`](self::repair) use `\b`/`\w` with the same class, so
/// tokenization and boundary checks agree on what a word is.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Word occurrences in `text` as (byte offset, word) pairs, in order
pub(crate) fn word_spans(text: &str) -> impl Iterator<Item = (usize, &str)> {
    WORD.find_iter(text).map(|m| (m.start(), m.as_str()))
}

/// Words in `text` that start with `prefix`, in document order.
///
/// An empty prefix matches every word.
pub fn tokenize(text: &str, prefix: &str) -> Vec<String> {
    word_spans(text)
        .map(|(_, w)| w)
        .filter(|w| w.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

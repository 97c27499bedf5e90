//! Size and count bounds on raw extraction output

use crate::config::EngineConfig;

/// Keep the first `max_words_per_file` tokens whose character length lies
/// within the configured bounds. Order is preserved.
///
/// Applied per source, this caps the whole pipeline's cost no matter how
/// large a document is.
pub fn filter_words(words: Vec<String>, config: &EngineConfig) -> Vec<String> {
    words
        .into_iter()
        .take(config.max_words_per_file)
        .filter(|w| {
            let len = w.chars().count();
            len >= config.min_word_size && len <= config.max_word_size
        })
        .collect()
}

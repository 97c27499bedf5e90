//! Repair for truncated extraction output.
//!
//! Some host word extractors return tokens missing their final character.
//! A token is truncated exactly when it does not occur in the buffer as a
//! whole word, and the defect always drops a single character, so the fix
//! is to search for the token extended by one word character. The whole
//! pass runs under a wall-clock budget so a pathological buffer cannot
//! stall an interactive completion request.

use crate::host::ActiveView;
use std::time::{Duration, Instant};

/// Replace truncated tokens with their whole-word forms found in `view`.
///
/// Tokens confirmed intact pass through unchanged. A truncated token is
/// replaced by every distinct one-character extension found in the buffer;
/// if the extended search finds nothing (tokens ending in non-word
/// characters defeat the `\w\b` probe), the original token is kept rather
/// than dropped. Once `budget` is exhausted the remaining tokens pass
/// through unrepaired.
pub fn fix_truncation(view: &dyn ActiveView, words: Vec<String>, budget: Duration) -> Vec<String> {
    let mut fixed = Vec::with_capacity(words.len());
    let started = Instant::now();

    for (i, word) in words.iter().enumerate() {
        let escaped = regex::escape(word);
        let truncated = view.find_first(&format!(r"\b{escaped}\b")).is_empty();
        if truncated {
            let extended = view.find_all(&format!(r"\b{escaped}\w\b"));
            if extended.is_empty() {
                fixed.push(word.clone());
            } else {
                fixed.extend(extended);
            }
        } else {
            fixed.push(word.clone());
        }

        if started.elapsed() > budget {
            let remaining = words.len() - i - 1;
            if remaining > 0 {
                log::debug!(
                    "truncation repair out of time, passing {remaining} words through unrepaired"
                );
            }
            fixed.extend(words[i + 1..].iter().cloned());
            break;
        }
    }

    fixed
}

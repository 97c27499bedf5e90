//! Engine configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable bounds for a completion request.
///
/// The defaults keep worst-case cost small enough for interactive use;
/// tests construct tighter bounds to exercise the limits directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Shortest word worth completing
    pub min_word_size: usize,
    /// Longest word worth completing
    pub max_word_size: usize,
    /// Maximum number of non-active sources consulted per request
    pub max_files: usize,
    /// Maximum words taken from any single source
    pub max_words_per_file: usize,
    /// Wall-clock budget for truncation repair, in milliseconds
    pub max_fix_time_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_word_size: 3,
            max_word_size: 50,
            max_files: 50,
            max_words_per_file: 200,
            max_fix_time_ms: 10,
        }
    }
}

impl EngineConfig {
    /// Repair budget as a `Duration`
    pub fn max_fix_time(&self) -> Duration {
        Duration::from_millis(self.max_fix_time_ms)
    }
}

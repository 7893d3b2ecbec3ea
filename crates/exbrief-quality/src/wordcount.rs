//! Advisory word-count gate for the rendered executive overview.
//!
//! A miss here is a soft warning: callers may ship a report that is
//! "too brief" or over target, but the message tells them so.

use serde::{Deserialize, Serialize};

/// Minimum words for a report that reads as substantive.
pub const MIN_WORDS: usize = 2000;
/// Maximum words before the overview stops being an overview.
pub const MAX_WORDS: usize = 3500;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountAssessment {
    pub meets_minimum: bool,
    pub meets_maximum: bool,
    pub message: String,
}

/// Check a word count against the overview targets.
pub fn meets_word_count_targets(word_count: usize) -> WordCountAssessment {
    let meets_minimum = word_count >= MIN_WORDS;
    let meets_maximum = word_count <= MAX_WORDS;

    let message = if !meets_minimum {
        format!(
            "Report is too brief at {} words; target is at least {}",
            word_count, MIN_WORDS
        )
    } else if !meets_maximum {
        format!(
            "Report's {} words exceed the {}-word target",
            word_count, MAX_WORDS
        )
    } else {
        format!(
            "Report meets word-count targets at {} words ({}-{})",
            word_count, MIN_WORDS, MAX_WORDS
        )
    };

    WordCountAssessment { meets_minimum, meets_maximum, message }
}

use serde::Serialize;

use super::normalize::Tokens;
use super::Options;

/// Assumed reading speed in words per minute.
pub const WORDS_PER_MINUTE: u32 = 238;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Metrics {
    pub total_characters: u32,
    pub word_count: u32,
    pub sentence_count: u32,
    pub reading_time_minutes: u32,
}

/// Derive the four headline numbers from a normalized token sequence.
///
/// Words are approximated as one more than the number of spaces, so runs of
/// consecutive spaces inflate the count. That is the intended behavior.
pub fn compute_metrics(tokens: &Tokens, options: &Options) -> Metrics {
    let space_count = to_u32(tokens.space_count());
    let len = to_u32(tokens.len());

    let total_characters = if options.exclude_spaces {
        len - space_count
    } else {
        len
    };
    let word_count = if tokens.is_empty() { 0 } else { space_count + 1 };
    let sentence_count = to_u32(
        tokens
            .iter()
            .filter(|&c| SENTENCE_TERMINATORS.contains(c))
            .count(),
    );

    Metrics {
        total_characters,
        word_count,
        sentence_count,
        reading_time_minutes: reading_time_minutes(word_count),
    }
}

pub fn reading_time_minutes(word_count: u32) -> u32 {
    word_count / WORDS_PER_MINUTE
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::Options;

/// Result of running the character limiter over raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitOutcome {
    pub text: String,
    pub limit_reached: bool,
    /// The threshold that was exceeded, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
}

impl LimitOutcome {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            limit_reached: false,
            threshold: None,
        }
    }

    /// The warning to surface to the user, only when the limit was hit.
    pub fn warning(&self) -> Option<String> {
        match (self.limit_reached, self.threshold) {
            (true, Some(n)) => Some(limit_message(n)),
            _ => None,
        }
    }
}

pub fn limit_message(threshold: u32) -> String {
    format!("Limit reached! Your text exceeds {threshold} characters.")
}

/// Truncate `text` to the configured limit. A missing or zero limit leaves the
/// text untouched.
pub fn apply_limit(text: &str, options: &Options) -> LimitOutcome {
    let threshold = match options.char_limit {
        Some(n) if n > 0 => n,
        _ => return LimitOutcome::unchanged(text),
    };

    let limit = threshold as usize;
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            debug!(threshold, "character limit reached, truncating input");
            LimitOutcome {
                text: text[..byte_idx].to_string(),
                limit_reached: true,
                threshold: Some(threshold),
            }
        }
        None => LimitOutcome::unchanged(text),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("Please enter a number, not {0:?}.")]
    NotANumber(String),
    #[error("Value must be greater than or equal to 0, got {0}.")]
    Negative(i64),
}

/// Validate the user-entered threshold field. Blank means "no limit".
pub fn validate_threshold(input: &str) -> Result<Option<u32>, ThresholdError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(n) = trimmed.parse::<u32>() {
        return Ok(Some(n));
    }

    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(ThresholdError::Negative(n)),
        _ => Err(ThresholdError::NotANumber(trimmed.to_string())),
    }
}

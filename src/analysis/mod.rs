pub mod density;
pub mod limit;
pub mod metrics;
pub mod normalize;

use serde::{Deserialize, Serialize};

// Re-export the main types for convenience
pub use density::{compute_density, Affordance, Density, DensityEntry, DensityTable, DensityView};
pub use limit::{apply_limit, limit_message, validate_threshold, LimitOutcome, ThresholdError};
pub use metrics::{compute_metrics, Metrics, WORDS_PER_MINUTE};
pub use normalize::{normalize, Tokens};

/// Analysis options as supplied by the shell. `char_limit` is already
/// validated; `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Options {
    pub exclude_spaces: bool,
    pub char_limit: Option<u32>,
}

/// Whether the density table shows every entry or just the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub expanded: bool,
}

impl ViewState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Everything one full pass derives from `(text, options, view)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub limit: LimitOutcome,
    pub metrics: Metrics,
    pub density: Density,
    pub expanded: bool,
}

/// Run every stage of the pipeline over `text`. Pure and idempotent.
pub fn analyze(text: &str, options: &Options, view: ViewState) -> Analysis {
    let limit = apply_limit(text, options);
    let tokens = normalize(&limit.text);
    let metrics = compute_metrics(&tokens, options);
    let density = compute_density(&tokens);

    Analysis {
        limit,
        metrics,
        density,
        expanded: view.expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrated_hi_hi() {
        let analysis = analyze("Hi. Hi!", &Options::default(), ViewState::default());
        assert_eq!(analysis.metrics.total_characters, 7);
        assert_eq!(analysis.metrics.word_count, 2);
        let table = analysis.density.table().unwrap();
        assert_eq!(table.len(), 2);
        assert!(!analysis.limit.limit_reached);
    }

    #[test]
    fn test_truncation_feeds_downstream_counts() {
        let options = Options {
            exclude_spaces: false,
            char_limit: Some(3),
        };
        let analysis = analyze("abcdef", &options, ViewState::default());
        assert_eq!(analysis.limit.text, "abc");
        assert_eq!(analysis.metrics.total_characters, 3);
        assert_eq!(analysis.density.table().unwrap().total_letters(), 3);
    }

    #[test]
    fn test_view_toggle() {
        let mut view = ViewState::default();
        view.toggle();
        assert!(view.expanded);
        view.toggle();
        assert!(!view.expanded);
    }
}

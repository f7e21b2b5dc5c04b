//! Analysis orchestration.
//!
//! A pass reads its inputs from a [`Shell`], optionally enforces the character
//! limit, normalizes once and then computes the facets the trigger asked for.
//! The shell is the only thing a pass talks to, so the same pipeline drives the
//! TUI and the headless tests.

use tracing::debug;

use crate::analysis::{
    apply_limit, compute_density, compute_metrics, normalize, Density, Metrics, Options,
    ViewState,
};

/// Inputs and render sinks a pass needs from its surroundings.
pub trait Shell {
    fn raw_text(&self) -> String;
    fn options(&self) -> Options;
    fn view_state(&self) -> ViewState;

    fn render_metrics(&mut self, metrics: &Metrics);
    fn render_density(&mut self, density: &Density, expanded: bool);
    /// `None` clears any previous warning.
    fn render_limit_warning(&mut self, message: Option<&str>);
    /// Called only when the limiter shortened the text.
    fn render_truncated_text(&mut self, text: &str);
}

/// User actions that start a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Trigger {
    TextEdited,
    ExcludeSpacesToggled,
    LimitToggled,
    LimitThresholdChanged,
    DensityViewToggled,
}

/// Which stages a pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facets {
    pub analyze: bool,
    pub limit: bool,
    pub density: bool,
}

impl Facets {
    pub const ALL: Facets = Facets {
        analyze: true,
        limit: true,
        density: true,
    };
}

impl Trigger {
    pub fn facets(self) -> Facets {
        match self {
            Trigger::TextEdited | Trigger::LimitThresholdChanged => Facets::ALL,
            Trigger::ExcludeSpacesToggled => Facets {
                analyze: true,
                limit: false,
                density: false,
            },
            Trigger::LimitToggled => Facets {
                analyze: false,
                limit: true,
                density: false,
            },
            Trigger::DensityViewToggled => Facets {
                analyze: false,
                limit: false,
                density: true,
            },
        }
    }
}

/// What a pass produced, for callers that want more than the render sinks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PassOutcome {
    pub limit_reached: bool,
    pub metrics: Option<Metrics>,
    pub density: Option<Density>,
}

pub fn run_trigger<S: Shell + ?Sized>(shell: &mut S, trigger: Trigger) -> PassOutcome {
    debug!(%trigger, "running analysis pass");
    run_pass(shell, trigger.facets())
}

pub fn run_pass<S: Shell + ?Sized>(shell: &mut S, facets: Facets) -> PassOutcome {
    let options = shell.options();
    let mut text = shell.raw_text();
    let mut outcome = PassOutcome::default();

    if facets.limit {
        let limited = apply_limit(&text, &options);
        if limited.limit_reached {
            shell.render_truncated_text(&limited.text);
        }
        shell.render_limit_warning(limited.warning().as_deref());
        outcome.limit_reached = limited.limit_reached;
        text = limited.text;
    }

    let tokens = normalize(&text);

    if facets.analyze {
        let metrics = compute_metrics(&tokens, &options);
        shell.render_metrics(&metrics);
        outcome.metrics = Some(metrics);
    }

    if facets.density {
        let density = compute_density(&tokens);
        let expanded = shell.view_state().expanded;
        shell.render_density(&density, expanded);
        outcome.density = Some(density);
    }

    outcome
}

use std::time::SystemTime;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::analysis::{
    validate_threshold, Density, Metrics, Options, ThresholdError, ViewState,
};
use crate::config::{Config, ConfigStore};
use crate::pipeline::{run_trigger, PassOutcome, Shell, Trigger};
use crate::runtime::AppEvent;
use crate::theme::Theme;

/// Initial state for a session, already merged from config and command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub text: String,
    pub exclude_spaces: bool,
    pub char_limit: Option<u32>,
    pub theme: Option<Theme>,
    pub expanded: bool,
}

impl Settings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            exclude_spaces: cfg.exclude_spaces,
            char_limit: cfg.char_limit,
            theme: cfg.theme,
            ..Default::default()
        }
    }

    pub fn options(&self) -> Options {
        Options {
            exclude_spaces: self.exclude_spaces,
            char_limit: self.char_limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text,
    Threshold,
}

/// The terminal shell around the analysis pipeline. Holds the editable
/// inputs and whatever the last pass rendered.
pub struct App {
    pub text: String,
    pub exclude_spaces: bool,
    pub limit_enabled: bool,
    pub threshold_input: String,
    pub threshold_error: Option<ThresholdError>,
    pub view: ViewState,
    pub theme: Theme,
    pub focus: Focus,

    pub metrics: Metrics,
    pub density: Density,
    pub limit_warning: Option<String>,
    pub should_quit: bool,

    /// Threshold the limiter uses. Only updated when the field is committed.
    char_limit: Option<u32>,
    store: Box<dyn ConfigStore>,
    config_seen: Option<SystemTime>,
}

impl App {
    pub fn new(settings: Settings, store: Box<dyn ConfigStore>) -> Self {
        let config_seen = store.modified();
        let mut app = Self {
            text: settings.text,
            exclude_spaces: settings.exclude_spaces,
            limit_enabled: settings.char_limit.is_some(),
            threshold_input: settings
                .char_limit
                .map(|n| n.to_string())
                .unwrap_or_default(),
            threshold_error: None,
            view: ViewState {
                expanded: settings.expanded,
            },
            theme: settings.theme.unwrap_or_else(Theme::detect),
            focus: Focus::Text,
            metrics: Metrics::default(),
            density: Density::Empty,
            limit_warning: None,
            should_quit: false,
            char_limit: settings.char_limit,
            store,
            config_seen,
        };
        app.trigger(Trigger::TextEdited);
        app
    }

    pub fn trigger(&mut self, trigger: Trigger) -> PassOutcome {
        run_trigger(self, trigger)
    }

    pub fn limit_reached(&self) -> bool {
        self.limit_warning.is_some()
    }

    /// The last committed threshold, or `None` when limiting is off.
    pub fn char_limit(&self) -> Option<u32> {
        self.char_limit
    }

    /// What the threshold field currently parses to. `None` when limiting is
    /// off, the field is blank, or the field is invalid.
    fn parsed_limit(&self) -> Option<u32> {
        if !self.limit_enabled {
            return None;
        }
        validate_threshold(&self.threshold_input).ok().flatten()
    }

    /// Returns true when the screen needs redrawing.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Paste(text) => self.on_paste(&text),
            AppEvent::Resize => {}
            AppEvent::Tick => {
                let before = self.theme;
                self.sync_theme();
                return before != self.theme;
            }
        }
        true
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('e') => self.toggle_exclude_spaces(),
                KeyCode::Char('l') => self.toggle_limit(),
                KeyCode::Char('d') => self.toggle_density_view(),
                KeyCode::Char('t') => self.toggle_theme(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Backspace => match self.focus {
                Focus::Text => {
                    if self.text.pop().is_some() {
                        self.trigger(Trigger::TextEdited);
                    }
                }
                Focus::Threshold => {
                    if self.threshold_input.pop().is_some() {
                        self.threshold_edited();
                    }
                }
            },
            KeyCode::Enter => match self.focus {
                Focus::Text => {
                    self.text.push('\n');
                    self.trigger(Trigger::TextEdited);
                }
                Focus::Threshold => self.commit_threshold(),
            },
            KeyCode::Char(c) => self.insert(&c.to_string()),
            _ => {}
        }
    }

    pub fn on_paste(&mut self, pasted: &str) {
        self.insert(pasted);
    }

    fn insert(&mut self, s: &str) {
        match self.focus {
            Focus::Text => {
                self.text.push_str(s);
                self.trigger(Trigger::TextEdited);
            }
            Focus::Threshold => {
                self.threshold_input.push_str(s);
                self.threshold_edited();
            }
        }
    }

    fn cycle_focus(&mut self) {
        if self.focus == Focus::Threshold {
            self.commit_threshold();
        }
        self.focus = match self.focus {
            Focus::Text if self.limit_enabled => Focus::Threshold,
            _ => Focus::Text,
        };
    }

    /// Keystrokes in the threshold field only validate. Truncating on every
    /// intermediate value would cut the text at "2" while typing "250".
    fn threshold_edited(&mut self) {
        self.threshold_error = validate_threshold(&self.threshold_input).err();
    }

    fn commit_threshold(&mut self) {
        let limit = self.parsed_limit();
        if limit == self.char_limit {
            return;
        }
        self.char_limit = limit;
        self.trigger(Trigger::LimitThresholdChanged);
        self.persist();
    }

    pub fn toggle_exclude_spaces(&mut self) {
        self.exclude_spaces = !self.exclude_spaces;
        self.trigger(Trigger::ExcludeSpacesToggled);
        self.persist();
    }

    pub fn toggle_limit(&mut self) {
        self.limit_enabled = !self.limit_enabled;
        if self.limit_enabled {
            self.focus = Focus::Threshold;
        } else {
            self.threshold_input.clear();
            self.threshold_error = None;
            self.focus = Focus::Text;
        }
        self.char_limit = self.parsed_limit();
        self.trigger(Trigger::LimitToggled);
        self.persist();
    }

    pub fn toggle_density_view(&mut self) {
        self.view.toggle();
        self.trigger(Trigger::DensityViewToggled);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "theme toggled");
        self.save(Some(self.theme));
    }

    /// Pick up a theme saved by another running instance.
    pub fn sync_theme(&mut self) {
        let modified = self.store.modified();
        if modified.is_none() || modified == self.config_seen {
            return;
        }
        self.config_seen = modified;

        if let Some(theme) = self.store.load().theme {
            if theme != self.theme {
                info!(%theme, "theme changed by another instance");
                self.theme = theme;
            }
        }
    }

    /// Save the options, leaving whatever theme is already stored alone.
    fn persist(&mut self) {
        let theme = self.store.load().theme;
        self.save(theme);
    }

    fn save(&mut self, theme: Option<Theme>) {
        let cfg = Config {
            theme,
            exclude_spaces: self.exclude_spaces,
            char_limit: self.char_limit,
        };
        if let Err(e) = self.store.save(&cfg) {
            warn!(error = %e, "failed to save config");
        }
        self.config_seen = self.store.modified();
    }
}

impl Shell for App {
    fn raw_text(&self) -> String {
        self.text.clone()
    }

    fn options(&self) -> Options {
        Options {
            exclude_spaces: self.exclude_spaces,
            char_limit: self.char_limit,
        }
    }

    fn view_state(&self) -> ViewState {
        self.view
    }

    fn render_metrics(&mut self, metrics: &Metrics) {
        self.metrics = *metrics;
    }

    fn render_density(&mut self, density: &Density, _expanded: bool) {
        self.density = density.clone();
    }

    fn render_limit_warning(&mut self, message: Option<&str>) {
        self.limit_warning = message.map(str::to_string);
    }

    fn render_truncated_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Guess the terminal's background from `COLORFGBG` ("fg;bg"). Falls back
    /// to dark when the variable is missing or unreadable.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| Self::from_colorfgbg(&v))
            .unwrap_or(Theme::Dark)
    }

    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        // ANSI 7 (white) and the bright range above 8 read as light backgrounds
        Some(if bg == 7 || bg > 8 {
            Theme::Light
        } else {
            Theme::Dark
        })
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Style::default()
                    .fg(Color::Rgb(196, 133, 254))
                    .add_modifier(Modifier::BOLD),
                dim: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                border: Style::default().fg(Color::DarkGray),
                focus: Style::default().fg(Color::Rgb(196, 133, 254)),
                error: Style::default().fg(Color::Rgb(254, 129, 65)),
                bar: Style::default().fg(Color::Rgb(196, 133, 254)),
                bar_track: Style::default().fg(Color::DarkGray),
                cards: [
                    Style::default().fg(Color::Black).bg(Color::Rgb(211, 160, 250)),
                    Style::default().fg(Color::Black).bg(Color::Rgb(255, 156, 101)),
                    Style::default().fg(Color::Black).bg(Color::Rgb(254, 139, 74)),
                ],
            },
            Theme::Light => Palette {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Style::default()
                    .fg(Color::Rgb(136, 62, 198))
                    .add_modifier(Modifier::BOLD),
                dim: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::Gray),
                focus: Style::default().fg(Color::Rgb(136, 62, 198)),
                error: Style::default().fg(Color::Rgb(218, 55, 1)),
                bar: Style::default().fg(Color::Rgb(136, 62, 198)),
                bar_track: Style::default().fg(Color::Gray),
                cards: [
                    Style::default().fg(Color::Black).bg(Color::Rgb(211, 160, 250)),
                    Style::default().fg(Color::Black).bg(Color::Rgb(255, 156, 101)),
                    Style::default().fg(Color::Black).bg(Color::Rgb(254, 139, 74)),
                ],
            },
        }
    }
}

/// Styles the ui draws with for a given theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: Style,
    pub accent: Style,
    pub dim: Style,
    pub border: Style,
    pub focus: Style,
    pub error: Style,
    pub bar: Style,
    pub bar_track: Style,
    /// Total characters, word count, sentence count.
    pub cards: [Style; 3],
}

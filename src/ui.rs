pub mod density_chart;
pub mod metrics_panel;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::theme::Palette;

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;
const CURSOR: &str = "▏";
const HELP: &str =
    "(tab) focus  (ctrl+e) exclude spaces  (ctrl+l) char limit  (ctrl+d) density  (ctrl+t) theme  (esc) quit";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        Block::default().style(palette.base).render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(5),    // text
                Constraint::Length(1), // limit hint
                Constraint::Length(1), // options
                Constraint::Length(4), // metric cards
                Constraint::Length(1), // reading time
                Constraint::Length(density_height(self)),
                Constraint::Length(1), // help
            ])
            .split(area);

        render_title(self, &palette, chunks[0], buf);
        render_text(self, &palette, chunks[1], buf);

        if let Some(warning) = &self.limit_warning {
            Paragraph::new(Span::styled(warning.as_str(), palette.error)).render(chunks[2], buf);
        }

        render_options(self, &palette, chunks[3], buf);
        metrics_panel::render_cards(&self.metrics, self.exclude_spaces, &palette, chunks[4], buf);
        Paragraph::new(Span::styled(
            metrics_panel::format_read_time(self.metrics.reading_time_minutes),
            palette.dim,
        ))
        .render(chunks[5], buf);
        density_chart::render_density(&self.density, self.view.expanded, &palette, chunks[6], buf);
        Paragraph::new(Span::styled(HELP, palette.dim.add_modifier(Modifier::ITALIC)))
            .render(chunks[7], buf);
    }
}

/// Rows the density panel wants: borders, visible entries and the affordance.
fn density_height(app: &App) -> u16 {
    let rows = match app.density.table() {
        None => 1,
        Some(table) => {
            let view = table.view(app.view.expanded);
            view.entries.len() + usize::from(view.affordance.is_some())
        }
    };
    rows as u16 + 2
}

fn render_title(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let theme = format!("theme: {}", app.theme);
    let pad = (area.width as usize).saturating_sub("Character Counter".len() + theme.len());
    Paragraph::new(Line::from(vec![
        Span::styled("Character Counter", palette.accent),
        Span::raw(" ".repeat(pad)),
        Span::styled(theme, palette.dim),
    ]))
    .render(area, buf);
}

/// Rows `text` occupies when wrapped at `width` columns.
pub fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .split('\n')
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn render_text(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let border_style = if app.limit_reached() {
        palette.error
    } else if app.focus == Focus::Text {
        palette.focus
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Text ");

    let mut shown = app.text.clone();
    if app.focus == Focus::Text {
        shown.push_str(CURSOR);
    }

    let inner = block.inner(area);
    let scroll = wrapped_rows(&shown, inner.width).saturating_sub(inner.height);

    let body = if app.text.is_empty() && app.focus != Focus::Text {
        Text::from(Span::styled("Start typing here… (or paste your text)", palette.dim))
    } else {
        Text::from(shown)
    };

    Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .render(area, buf);
}

fn render_options(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let checkbox = |on: bool| if on { "[x] " } else { "[ ] " };

    let mut spans = vec![
        Span::raw(checkbox(app.exclude_spaces)),
        Span::raw("Exclude Spaces    "),
        Span::raw(checkbox(app.limit_enabled)),
        Span::raw("Set Character Limit"),
    ];

    if app.limit_enabled {
        let field_style = if app.threshold_error.is_some() {
            palette.error
        } else if app.focus == Focus::Threshold {
            palette.focus
        } else {
            palette.base
        };
        let mut field = app.threshold_input.clone();
        if app.focus == Focus::Threshold {
            field.push_str(CURSOR);
        }
        spans.push(Span::raw(": "));
        spans.push(Span::styled(
            format!("[{field:<6}]"),
            field_style.add_modifier(Modifier::UNDERLINED),
        ));
        if let Some(err) = &app.threshold_error {
            spans.push(Span::styled(format!(" {err}"), palette.error));
        }
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Settings;
    use crate::config::MemoryConfigStore;
    use crate::theme::Theme;

    fn render(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(text: &str) -> App {
        App::new(
            Settings {
                text: text.into(),
                theme: Some(Theme::Dark),
                ..Default::default()
            },
            Box::new(MemoryConfigStore::default()),
        )
    }

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("abcdefghij", 10), 1);
        assert_eq!(wrapped_rows("abcdefghijk", 10), 2);
        assert_eq!(wrapped_rows("a\nb\n", 10), 3);
    }

    #[test]
    fn test_renders_metrics_and_density() {
        let screen = render(&app("Hi. Hi!"), 100, 40);
        assert!(screen.contains("07"));
        assert!(screen.contains("Total Characters"));
        assert!(screen.contains("Approx. reading time: <1 minute"));
        assert!(screen.contains("2 (50.00%)"));
        assert!(screen.contains("theme: dark"));
    }

    #[test]
    fn test_renders_empty_density_message() {
        let screen = render(&app(""), 100, 40);
        assert!(screen.contains("No characters found"));
    }

    #[test]
    fn test_renders_see_more_for_long_tables() {
        let screen = render(&app("abcdefg"), 100, 40);
        assert!(screen.contains("See more"));
        assert!(!screen.contains("See less"));
    }

    #[test]
    fn test_renders_limit_warning() {
        let app = App::new(
            Settings {
                text: "abcdef".into(),
                char_limit: Some(3),
                theme: Some(Theme::Light),
                ..Default::default()
            },
            Box::new(MemoryConfigStore::default()),
        );
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Limit reached! Your text exceeds 3 characters."));
        assert!(screen.contains("[x] Set Character Limit"));
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::analysis::{Affordance, Density, DensityEntry};
use crate::theme::Palette;

pub const NO_CHARACTERS_FOUND: &str = "No characters found. Start typing to see letter density.";

/// Width reserved for the letter column and the count label.
const LABEL_WIDTH: u16 = 18;

/// Number of filled cells for a percentage on a bar of `width` cells.
pub fn bar_cells(percentage: f64, width: u16) -> u16 {
    let filled = (percentage / 100.0 * f64::from(width)).round();
    (filled.max(0.0) as u16).min(width)
}

pub fn count_label(entry: &DensityEntry) -> String {
    format!("{} ({:.2}%)", entry.count, entry.percentage)
}

pub fn affordance_label(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::SeeMore => "See more ▾ (ctrl+d)",
        Affordance::SeeLess => "See less ▴ (ctrl+d)",
    }
}

/// Pure presenter for one density row
pub fn present_row(entry: &DensityEntry, bar_width: u16, palette: &Palette) -> Line<'static> {
    let filled = bar_cells(entry.percentage, bar_width);
    Line::from(vec![
        Span::styled(format!("{:<3}", entry.letter), palette.accent),
        Span::styled("█".repeat(filled as usize), palette.bar),
        Span::styled("░".repeat((bar_width - filled) as usize), palette.bar_track),
        Span::raw(format!(" {}", count_label(entry))),
    ])
}

pub fn render_density(density: &Density, expanded: bool, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(Span::styled(" Letter Density ", palette.accent));

    let table = match density {
        Density::Empty => {
            Paragraph::new(Span::styled(NO_CHARACTERS_FOUND, palette.dim))
                .block(block)
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }
        Density::Table(table) => table,
    };

    let bar_width = area.width.saturating_sub(2 + LABEL_WIDTH).max(1);
    let view = table.view(expanded);
    let mut lines: Vec<Line> = view
        .entries
        .iter()
        .map(|entry| present_row(entry, bar_width, palette))
        .collect();
    if let Some(affordance) = view.affordance {
        lines.push(Line::from(Span::styled(affordance_label(affordance), palette.dim)));
    }

    Paragraph::new(lines).block(block).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn entry(letter: char, count: u32, percentage: f64) -> DensityEntry {
        DensityEntry {
            letter,
            count,
            percentage,
        }
    }

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(50.0, 20), 10);
        assert_eq!(bar_cells(100.0, 20), 20);
        assert_eq!(bar_cells(0.0, 20), 0);
        assert_eq!(bar_cells(2.4, 20), 0);
        assert_eq!(bar_cells(2.6, 20), 1);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(&entry('H', 2, 50.0)), "2 (50.00%)");
        assert_eq!(count_label(&entry('Q', 1, 3.7)), "1 (3.70%)");
    }

    #[test]
    fn test_present_row_fills_bar() {
        let palette = Theme::Dark.palette();
        let line = present_row(&entry('E', 3, 75.0), 8, &palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "E  ██████░░ 3 (75.00%)");
    }
}

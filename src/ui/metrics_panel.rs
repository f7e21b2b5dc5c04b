use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::analysis::Metrics;
use crate::theme::Palette;
use crate::util::pad_two;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub value: String,
    pub label: &'static str,
}

/// Headline cards in display order, each value padded to two digits.
pub fn cards(metrics: &Metrics) -> [Card; 3] {
    [
        Card {
            value: pad_two(metrics.total_characters),
            label: "Total Characters",
        },
        Card {
            value: pad_two(metrics.word_count),
            label: "Word Count",
        },
        Card {
            value: pad_two(metrics.sentence_count),
            label: "Sentence Count",
        },
    ]
}

pub fn format_read_time(minutes: u32) -> String {
    let shown = if minutes == 0 {
        "<1".to_string()
    } else {
        minutes.to_string()
    };
    format!("Approx. reading time: {shown} minute")
}

pub fn render_cards(metrics: &Metrics, exclude_spaces: bool, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (idx, card) in cards(metrics).iter().enumerate() {
        let style = palette.cards[idx];
        let mut label = vec![Span::raw(card.label)];
        if idx == 0 && exclude_spaces {
            label.push(Span::styled(" (no space)", style.add_modifier(Modifier::ITALIC)));
        }

        Paragraph::new(vec![
            Line::from(Span::styled(card.value.clone(), style.add_modifier(Modifier::BOLD))),
            Line::from(label),
        ])
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .style(style)
        .alignment(Alignment::Center)
        .render(chunks[idx], buf);
    }
}

//! Non-interactive output of a single analysis pass.

use std::io::Write;

use crate::analysis::{Analysis, Density};
use crate::error::Result;
use crate::ui::density_chart::{affordance_label, count_label, NO_CHARACTERS_FOUND};
use crate::ui::metrics_panel::{cards, format_read_time};

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Text,
    Json,
    Csv,
}

pub fn write_report<W: Write>(analysis: &Analysis, format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Text => write_text(analysis, out),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, analysis)?;
            writeln!(out)?;
            Ok(())
        }
        Format::Csv => write_csv(analysis, out),
    }
}

fn write_text<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    if let Some(warning) = analysis.limit.warning() {
        writeln!(out, "{warning}")?;
    }

    for card in cards(&analysis.metrics) {
        writeln!(out, "{:<18}{}", card.label, card.value)?;
    }
    writeln!(out, "{}", format_read_time(analysis.metrics.reading_time_minutes))?;
    writeln!(out)?;
    writeln!(out, "Letter Density")?;

    match &analysis.density {
        Density::Empty => writeln!(out, "{NO_CHARACTERS_FOUND}")?,
        Density::Table(table) => {
            let view = table.view(analysis.expanded);
            for entry in view.entries {
                writeln!(out, "{}  {}", entry.letter, count_label(entry))?;
            }
            if let Some(affordance) = view.affordance {
                let label = affordance_label(affordance);
                // keyboard hints only make sense in the tui
                let label = label.split(" (").next().unwrap_or(label);
                writeln!(out, "{label}")?;
            }
        }
    }
    Ok(())
}

/// Full table, never paginated.
fn write_csv<W: Write>(analysis: &Analysis, out: &mut W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["letter", "count", "percentage"])?;
    if let Some(table) = analysis.density.table() {
        for entry in table.entries() {
            wtr.write_record([
                entry.letter.to_string(),
                entry.count.to_string(),
                format!("{:.2}", entry.percentage),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

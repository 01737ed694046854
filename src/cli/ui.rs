//! Terminal styling for command summaries

use console::{StyledObject, style};

/// The role a value plays in a summary line.
pub enum Tone {
    Label,
    Changed,
    Total,
    Path,
}

pub fn paint<D>(value: D, tone: Tone) -> StyledObject<D> {
    match tone {
        Tone::Label => style(value).bold(),
        Tone::Changed => style(value).green().bold(),
        Tone::Total => style(value).cyan(),
        Tone::Path => style(value).dim(),
    }
}

/// "Enriched 3 of 5 items in items.jsonl"
pub fn enrich_summary(path: &str, total: usize, enriched: usize) -> String {
    format!(
        "{} {} of {} items in {}",
        paint("Enriched", Tone::Label),
        paint(enriched, Tone::Changed),
        paint(total, Tone::Total),
        paint(path, Tone::Path),
    )
}

//! Terminal presentation of a holiday list.

use colored::*;

use crate::models::HolidayRecord;

/// Splits records into two display columns; the first holds `ceil(n / 2)` records.
pub fn split_columns(records: &[HolidayRecord]) -> (&[HolidayRecord], &[HolidayRecord]) {
    records.split_at(records.len().div_ceil(2))
}

fn line(record: &HolidayRecord) -> String {
    format!("{} - {}", record.date, record.description)
}

fn paint(record: &HolidayRecord, text: &str) -> ColoredString {
    if record.is_discretionary {
        text.bright_black()
    } else {
        text.normal()
    }
}

/// Renders the heading and the two columns, discretionary holidays dimmed.
pub fn render_columns(heading: &str, records: &[HolidayRecord]) -> String {
    let (left, right) = split_columns(records);
    let width = left
        .iter()
        .map(|r| line(r).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n\n", heading.bold());
    for (i, record) in left.iter().enumerate() {
        let text = line(record);
        let padding = " ".repeat(width - text.chars().count() + 4);
        out.push_str(&format!("  {}", paint(record, &text)));
        if let Some(other) = right.get(i) {
            out.push_str(&padding);
            out.push_str(&paint(other, &line(other)).to_string());
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "\n  {} feriado nacional   {} feriado facultativo\n",
        "■".normal(),
        "■".bright_black()
    ));
    out
}

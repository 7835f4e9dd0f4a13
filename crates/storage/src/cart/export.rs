use chrono::NaiveDate;

use super::CartEntry;
use crate::error::{Result, StorageError};

pub const EXPORT_HEADERS: [&str; 9] = [
    "Name",
    "Position",
    "Jersey #",
    "Team",
    "Avg PER-10",
    "Avg AFTERSNAP IQ",
    "Total Plays",
    "Archetypes",
    "Notes",
];

pub const ARCHETYPE_SEPARATOR: &str = "; ";

const FIELD_SEPARATOR: u8 = b',';

/// Header row plus one fully quoted row per entry, joined by `\n`.
///
/// The header is written bare; every data field is quoted and embedded
/// quotes are doubled.
pub fn export_delimited(entries: &[CartEntry]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for entry in entries {
        let number = entry.number.to_string();
        let avg_per_10 = format!("{:.2}", entry.avg_per_10);
        let avg_iq = format!("{:.2}", entry.avg_aftersnap_iq);
        let plays = entry.total_plays_tagged.to_string();
        let archetypes = entry.archetype_tags.join(ARCHETYPE_SEPARATOR);

        writer.write_record([
            entry.name.as_str(),
            entry.position.as_str(),
            number.as_str(),
            entry.team.as_str(),
            avg_per_10.as_str(),
            avg_iq.as_str(),
            plays.as_str(),
            archetypes.as_str(),
            entry.notes.as_str(),
        ])?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| StorageError::Io(e.into_error()))?;
    let rows = String::from_utf8(rows)
        .map_err(|e| StorageError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let mut out = EXPORT_HEADERS.join(",");
    if let Some(rows) = rows.strip_suffix('\n') {
        out.push('\n');
        out.push_str(rows);
    }
    Ok(out)
}

/// Suggested download name: `<cart name>-<YYYY-MM-DD>.csv`.
pub fn export_filename(cart_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", cart_name, date.format("%Y-%m-%d"))
}

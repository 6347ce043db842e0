//! CSV export of record collections.
//!
//! Every field is double-quoted and embedded quotes are doubled. Rows are
//! written in the order given; callers sort before exporting.

use chrono::NaiveDate;

use crate::record_kind::RecordKind;
use crate::types::Timestamp;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// A record that can be flattened to one CSV row.
pub trait CsvRecord {
    /// Column names for the header row.
    fn csv_header() -> &'static [&'static str];

    /// Field values, one per header column.
    fn csv_row(&self) -> Vec<String>;
}

/// Quote a single field, doubling any embedded quote characters.
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn write_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    let line = fields
        .iter()
        .map(|f| quote_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
}

/// Serialize `records` with a header row. Rows are separated by `\n`.
pub fn to_csv<'a, T, I>(records: I) -> String
where
    T: CsvRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    write_row(&mut out, T::csv_header());
    for record in records {
        out.push('\n');
        write_row(&mut out, record.csv_row().as_slice());
    }
    out
}

/// Render an export timestamp (`2026-05-06 16:00:00 UTC`).
pub fn format_export_timestamp(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Download name for an export: `<kind-slug>-<YYYY-MM-DD>.csv`.
pub fn export_filename(kind: RecordKind, date: NaiveDate) -> String {
    format!("{}-{}.csv", kind.export_slug(), date.format("%Y-%m-%d"))
}

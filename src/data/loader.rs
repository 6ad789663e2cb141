use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

// Positional: date, close, open, high, low, volatility. The header row is
// skipped without being inspected.
const DATE: usize = 0;
const CLOSE: usize = 1;
const OPEN: usize = 2;
const VOLATILITY: usize = 5;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a market data CSV from disk.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading CSV file {}", path.display()))?;
    Ok(parse_csv(&text))
}

/// Parse CSV text into a [`Dataset`].
///
/// The first line is a header and is discarded. Rows are read leniently: a
/// row is kept only when its close is a finite number and its date parses,
/// everything else (including blank lines) is dropped without error.
pub fn parse_csv(text: &str) -> Dataset {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        match row.ok().and_then(|row| parse_row(&row)) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} malformed row(s)");
    }

    Dataset::from_records(records)
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

fn parse_row(row: &StringRecord) -> Option<Record> {
    let close = parse_number(row.get(CLOSE));
    if !close.is_finite() {
        return None;
    }
    let date = parse_date(row.get(DATE)?)?;

    Some(Record {
        date,
        open: parse_number(row.get(OPEN)),
        close,
        volatility: parse_number(row.get(VOLATILITY)),
    })
}

/// Missing or unparsable cells become NaN so they never shift other columns.
fn parse_number(cell: Option<&str>) -> f64 {
    cell.map(leading_number).unwrap_or(f64::NAN)
}

/// Parse the longest numeric prefix of `s`, ignoring whatever follows
/// (`"1.2%"` is 1.2, `"101.5 USD"` is 101.5). `Infinity` is recognised so
/// the finite check can reject it; anything without a leading number is NaN.
pub fn leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse a calendar date, accepting common date and datetime spellings.
/// Datetimes are truncated to their date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

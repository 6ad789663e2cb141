use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one row of the market data file
// ---------------------------------------------------------------------------

/// A single trading day. High/low are read from the file but not kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    /// Daily volatility in percent.
    pub volatility: f64,
}

// ---------------------------------------------------------------------------
// DateRange – inclusive [start, end]
// ---------------------------------------------------------------------------

/// Inclusive date bounds. `start > end` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the bounds (both ends inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All records of the most recently loaded file, in file row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date present (rows need not be sorted).
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    /// Latest date present.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }

    /// The range spanning every record, or `None` when empty.
    pub fn date_span(&self) -> Option<DateRange> {
        Some(DateRange::new(self.first_date()?, self.last_date()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate) -> Record {
        Record {
            date,
            open: 1.0,
            close: 1.0,
            volatility: 1.0,
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 31));
        assert!(range.contains(day(2024, 1, 1)));
        assert!(range.contains(day(2024, 1, 31)));
        assert!(!range.contains(day(2024, 2, 1)));
        assert!(!range.contains(day(2023, 12, 31)));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let range = DateRange::new(day(2024, 2, 1), day(2024, 1, 1));
        assert!(!range.contains(day(2024, 1, 15)));
        assert!(!range.contains(day(2024, 1, 1)));
    }

    #[test]
    fn span_ignores_row_order() {
        let ds = Dataset::from_records(vec![
            record(day(2024, 3, 1)),
            record(day(2023, 6, 1)),
            record(day(2024, 1, 1)),
        ]);
        let span = ds.date_span().unwrap();
        assert_eq!(span.start, day(2023, 6, 1));
        assert_eq!(span.end, day(2024, 3, 1));
    }

    #[test]
    fn empty_dataset_has_no_span() {
        assert_eq!(Dataset::default().date_span(), None);
    }
}

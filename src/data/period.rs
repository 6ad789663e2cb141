use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::model::{Dataset, DateRange};

// ---------------------------------------------------------------------------
// Quick-period tokens
// ---------------------------------------------------------------------------

/// Named shortcut for a range ending "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickPeriod {
    #[serde(rename = "1D")]
    Day,
    #[serde(rename = "1W")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "3M")]
    Quarter,
    #[serde(rename = "6M")]
    HalfYear,
    #[serde(rename = "1Y")]
    Year,
    #[serde(rename = "ALL")]
    All,
}

impl Default for QuickPeriod {
    fn default() -> Self {
        QuickPeriod::All
    }
}

impl QuickPeriod {
    /// Every token, in the order the toolbar shows them.
    pub const ALL_PERIODS: [QuickPeriod; 7] = [
        QuickPeriod::Day,
        QuickPeriod::Week,
        QuickPeriod::Month,
        QuickPeriod::Quarter,
        QuickPeriod::HalfYear,
        QuickPeriod::Year,
        QuickPeriod::All,
    ];

    pub fn token(self) -> &'static str {
        match self {
            QuickPeriod::Day => "1D",
            QuickPeriod::Week => "1W",
            QuickPeriod::Month => "1M",
            QuickPeriod::Quarter => "3M",
            QuickPeriod::HalfYear => "6M",
            QuickPeriod::Year => "1Y",
            QuickPeriod::All => "ALL",
        }
    }

    /// The range `[start, now]` for this period.
    ///
    /// Month and year steps use calendar arithmetic; a day-of-month that does
    /// not exist in the target month is clamped to its last day. `All` starts
    /// at the earliest date in the full dataset and yields `None` when the
    /// dataset is empty.
    pub fn range(self, now: NaiveDate, dataset: &Dataset) -> Option<DateRange> {
        let start = match self {
            QuickPeriod::Day => now.checked_sub_days(Days::new(1)),
            QuickPeriod::Week => now.checked_sub_days(Days::new(7)),
            QuickPeriod::Month => now.checked_sub_months(Months::new(1)),
            QuickPeriod::Quarter => now.checked_sub_months(Months::new(3)),
            QuickPeriod::HalfYear => now.checked_sub_months(Months::new(6)),
            QuickPeriod::Year => now.checked_sub_months(Months::new(12)),
            QuickPeriod::All => dataset.first_date(),
        }?;
        Some(DateRange::new(start, now))
    }
}

impl fmt::Display for QuickPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown period token: {0}")]
pub struct UnknownPeriod(pub String);

impl FromStr for QuickPeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickPeriod::ALL_PERIODS
            .into_iter()
            .find(|p| p.token().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset(dates: &[NaiveDate]) -> Dataset {
        Dataset::from_records(
            dates
                .iter()
                .map(|&date| Record {
                    date,
                    open: 1.0,
                    close: 1.0,
                    volatility: 1.0,
                })
                .collect(),
        )
    }

    #[test]
    fn relative_periods() {
        let now = day(2024, 5, 15);
        let ds = Dataset::default();
        let start = |p: QuickPeriod| p.range(now, &ds).unwrap().start;

        assert_eq!(start(QuickPeriod::Day), day(2024, 5, 14));
        assert_eq!(start(QuickPeriod::Week), day(2024, 5, 8));
        assert_eq!(start(QuickPeriod::Month), day(2024, 4, 15));
        assert_eq!(start(QuickPeriod::Quarter), day(2024, 2, 15));
        assert_eq!(start(QuickPeriod::HalfYear), day(2023, 11, 15));
        assert_eq!(start(QuickPeriod::Year), day(2023, 5, 15));
        assert_eq!(QuickPeriod::Week.range(now, &ds).unwrap().end, now);
    }

    #[test]
    fn month_end_is_clamped() {
        let ds = Dataset::default();
        let r = QuickPeriod::Month.range(day(2024, 3, 31), &ds).unwrap();
        assert_eq!(r.start, day(2024, 2, 29));
        let r = QuickPeriod::Year.range(day(2024, 2, 29), &ds).unwrap();
        assert_eq!(r.start, day(2023, 2, 28));
    }

    #[test]
    fn all_uses_full_dataset_minimum() {
        let ds = dataset(&[day(2023, 5, 1), day(2021, 2, 3), day(2022, 1, 1)]);
        let r = QuickPeriod::All.range(day(2024, 1, 1), &ds).unwrap();
        assert_eq!(r, DateRange::new(day(2021, 2, 3), day(2024, 1, 1)));
    }

    #[test]
    fn all_on_empty_dataset_is_none() {
        assert_eq!(QuickPeriod::All.range(day(2024, 1, 1), &Dataset::default()), None);
    }

    #[test]
    fn tokens_parse_back() {
        for p in QuickPeriod::ALL_PERIODS {
            assert_eq!(p.to_string().parse::<QuickPeriod>(), Ok(p));
        }
        assert_eq!("all".parse::<QuickPeriod>(), Ok(QuickPeriod::All));
        assert!("2Y".parse::<QuickPeriod>().is_err());
    }

    #[test]
    fn serde_uses_tokens() {
        let json = serde_json::to_string(&QuickPeriod::Quarter).unwrap();
        assert_eq!(json, "\"3M\"");
        let p: QuickPeriod = serde_json::from_str("\"1Y\"").unwrap();
        assert_eq!(p, QuickPeriod::Year);
    }
}

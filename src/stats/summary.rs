use serde::Serialize;

use super::descriptive::{mean, median, mode, standard_deviation};
use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolatilityStats {
    pub mean: f64,
    pub sd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceStats {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub sd: f64,
}

/// Statistics for one filtered selection. Recomputed per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub volatility: VolatilityStats,
    pub price: PriceStats,
}

impl StatisticsSummary {
    /// `(mean - k·sd, mean + k·sd)` of the close price.
    pub fn price_band(&self, k: f64) -> (f64, f64) {
        (self.price.mean - k * self.price.sd, self.price.mean + k * self.price.sd)
    }

    /// `(mean - sd, mean + sd)` of the volatility.
    pub fn volatility_band(&self) -> (f64, f64) {
        (
            self.volatility.mean - self.volatility.sd,
            self.volatility.mean + self.volatility.sd,
        )
    }
}

/// Compute volatility and close-price statistics over `records`.
pub fn calculate_statistics(records: &[Record]) -> StatisticsSummary {
    let volatilities: Vec<f64> = records.iter().map(|r| r.volatility).collect();
    let prices: Vec<f64> = records.iter().map(|r| r.close).collect();

    StatisticsSummary {
        volatility: VolatilityStats {
            mean: mean(&volatilities),
            sd: standard_deviation(&volatilities),
        },
        price: PriceStats {
            mean: mean(&prices),
            median: median(&prices),
            mode: mode(&prices),
            sd: standard_deviation(&prices),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn records(closes: &[f64], vols: &[f64]) -> Vec<Record> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .zip(vols)
            .enumerate()
            .map(|(i, (&close, &volatility))| Record {
                date: start + chrono::Duration::days(i as i64),
                open: close - 1.0,
                close,
                volatility,
            })
            .collect()
    }

    #[test]
    fn uses_close_and_volatility_columns() {
        let recs = records(&[10.0, 20.0, 30.0], &[1.0, 2.0, 3.0]);
        let s = calculate_statistics(&recs);
        assert_eq!(s.price.mean, 20.0);
        assert_eq!(s.price.median, 20.0);
        assert_eq!(s.price.mode, 10.0);
        assert_eq!(s.volatility.mean, 2.0);
        assert!((s.volatility.sd - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn bands() {
        let recs = records(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[1.0; 8]);
        let s = calculate_statistics(&recs);
        let (lo, hi) = s.price_band(2.0);
        assert!((lo - 1.0).abs() < 1e-12);
        assert!((hi - 9.0).abs() < 1e-12);
        assert_eq!(s.volatility_band(), (1.0, 1.0));
    }

    #[test]
    fn repeated_runs_agree() {
        let recs = records(&[3.0, 1.0, 2.0, 2.0], &[0.5, 0.7, 0.1, 0.3]);
        let copy = recs.clone();
        let first = calculate_statistics(&recs);
        let second = calculate_statistics(&recs);
        assert_eq!(first, second);
        assert_eq!(recs, copy);
    }
}

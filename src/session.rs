use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::data::filter::{filter_range, AnalysisError};
use crate::data::loader;
use crate::data::model::{Dataset, DateRange, Record};
use crate::data::period::QuickPeriod;
use crate::stats::{calculate_statistics, StatisticsSummary};

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

/// Output of one analysis request: the selection and its statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub range: DateRange,
    pub records: Vec<Record>,
    pub summary: StatisticsSummary,
}

impl Analysis {
    /// Smallest and largest open price in the selection, used to span the
    /// scatter plot's reference lines.
    pub fn open_extent(&self) -> (f64, f64) {
        self.records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.open), hi.max(r.open)),
        )
    }
}

// ---------------------------------------------------------------------------
// Session – caller-held dataset with load/analyze entry points
// ---------------------------------------------------------------------------

/// Holds the current dataset between requests. Each load replaces it whole.
#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset from the last load, if any.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Parse `text` and make it the current dataset.
    pub fn load(&mut self, text: &str) -> &Dataset {
        self.replace(loader::parse_csv(text))
    }

    /// Read a CSV from disk and make it the current dataset. On failure the
    /// previous dataset is kept.
    pub fn load_file(&mut self, path: &Path) -> Result<&Dataset> {
        let dataset = loader::load_file(path)?;
        Ok(self.replace(dataset))
    }

    fn replace(&mut self, dataset: Dataset) -> &Dataset {
        log::info!(
            "Loaded {} records spanning {}",
            dataset.len(),
            dataset
                .date_span()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "no dates".to_string())
        );
        self.dataset.insert(dataset)
    }

    /// Filter the current dataset to `range` and compute its statistics.
    pub fn analyze(&self, range: DateRange) -> Result<Analysis, AnalysisError> {
        let dataset = self.dataset.as_ref().ok_or(AnalysisError::NoData)?;
        log::debug!("Analyzing {range}");

        let records = filter_range(dataset, &range)?;
        let summary = calculate_statistics(&records);
        Ok(Analysis {
            range,
            records,
            summary,
        })
    }

    /// Resolve `period` against `now` and analyze the resulting range.
    pub fn analyze_period(
        &self,
        period: QuickPeriod,
        now: NaiveDate,
    ) -> Result<Analysis, AnalysisError> {
        let dataset = self.dataset.as_ref().ok_or(AnalysisError::NoData)?;
        let range = period
            .range(now, dataset)
            .ok_or(AnalysisError::EmptySelection)?;
        self.analyze(range)
    }
}

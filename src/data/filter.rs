use thiserror::Error;

use super::model::{Dataset, DateRange, Record};

/// Reasons an analysis request produces no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("No data loaded")]
    NoData,
    #[error("No data available for selected date range")]
    EmptySelection,
}

/// Return the records whose date lies in `range`, in dataset order.
///
/// An empty result is reported as [`AnalysisError::EmptySelection`] so the
/// caller can skip charting and statistics for the request.
pub fn filter_range(dataset: &Dataset, range: &DateRange) -> Result<Vec<Record>, AnalysisError> {
    let selected: Vec<Record> = dataset
        .records
        .iter()
        .filter(|r| range.contains(r.date))
        .copied()
        .collect();

    if selected.is_empty() {
        return Err(AnalysisError::EmptySelection);
    }
    Ok(selected)
}

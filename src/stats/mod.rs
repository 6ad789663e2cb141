/// Statistics layer: descriptive measures, per-selection summary, text report.

pub mod descriptive;
pub mod report;
pub mod summary;

pub use descriptive::{histogram, mean, median, mode, standard_deviation, sturges_bins, Bin};
pub use report::{report_sections, ReportSection};
pub use summary::{calculate_statistics, PriceStats, StatisticsSummary, VolatilityStats};

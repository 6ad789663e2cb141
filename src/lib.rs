//! Rusty Ticker core: daily market data loading, date-range selection and
//! descriptive statistics. The egui front-end lives in the binary.

pub mod config;
pub mod data;
pub mod session;
pub mod stats;

pub use data::filter::AnalysisError;
pub use data::model::{Dataset, DateRange, Record};
pub use data::period::QuickPeriod;
pub use session::{Analysis, Session};
pub use stats::StatisticsSummary;

/// Data layer: core types, loading, range filtering and quick periods.
///
/// Architecture:
/// ```text
///   market.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse text → Dataset (lenient, bad rows dropped)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ◄─── │  period   │  1D … 1Y / ALL → DateRange
///   └──────────┘      └──────────┘
///        │
///        ▼
///   Vec<Record> or EmptySelection
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod period;

//! End-to-end checks: CSV text through the session to a statistics summary.

use chrono::NaiveDate;
use rusty_ticker::stats::{mean, median, mode, report_sections, standard_deviation};
use rusty_ticker::{AnalysisError, DateRange, QuickPeriod, Session};

const TOL: f64 = 1e-9;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Ten trading days with hand-picked closes and volatilities.
const TEN_DAYS: &str = "\
date,close,open,high,low,volatility
2024-03-01,10,9.5,10.5,9.0,1.0
2024-03-04,12,10.0,12.5,9.8,1.5
2024-03-05,11,12.0,12.2,10.9,2.0
2024-03-06,12,11.0,12.4,10.8,2.5
2024-03-07,13,12.0,13.5,11.9,3.0
2024-03-08,14,13.0,14.2,12.8,1.0
2024-03-11,12,14.0,14.1,11.7,1.5
2024-03-12,15,12.0,15.3,11.9,2.0
2024-03-13,11,15.0,15.0,10.6,2.5
2024-03-14,10,11.0,11.2,9.7,3.0
";

fn loaded() -> Session {
    let mut session = Session::new();
    assert_eq!(session.load(TEN_DAYS).len(), 10);
    session
}

#[test]
fn ten_day_summary_matches_hand_computation() {
    let session = loaded();
    let analysis = session
        .analyze(DateRange::new(day(2024, 3, 1), day(2024, 3, 14)))
        .unwrap();
    let s = analysis.summary;

    // closes: sum 120, squared deviations sum 24
    assert!((s.price.mean - 12.0).abs() < TOL);
    assert!((s.price.sd - 2.4f64.sqrt()).abs() < TOL);
    assert!((s.price.median - 12.0).abs() < TOL);
    assert!((s.price.mode - 12.0).abs() < TOL);

    // volatilities: sum 20, squared deviations sum 5
    assert!((s.volatility.mean - 2.0).abs() < TOL);
    assert!((s.volatility.sd - 0.5f64.sqrt()).abs() < TOL);
}

#[test]
fn sub_range_keeps_file_order() {
    let session = loaded();
    let analysis = session
        .analyze(DateRange::new(day(2024, 3, 6), day(2024, 3, 11)))
        .unwrap();
    let closes: Vec<f64> = analysis.records.iter().map(|r| r.close).collect();
    assert_eq!(closes, vec![12.0, 13.0, 14.0, 12.0]);
    assert_eq!(analysis.summary.price.mode, 12.0);
}

#[test]
fn inverted_range_is_always_empty() {
    let session = loaded();
    let err = session
        .analyze(DateRange::new(day(2024, 3, 14), day(2024, 3, 1)))
        .unwrap_err();
    assert_eq!(err, AnalysisError::EmptySelection);
    assert_eq!(err.to_string(), "No data available for selected date range");
}

#[test]
fn repeated_analysis_is_identical() {
    let session = loaded();
    let range = DateRange::new(day(2024, 3, 1), day(2024, 3, 31));
    let first = session.analyze(range).unwrap();
    let second = session.analyze(range).unwrap();
    assert_eq!(first, second);
}

#[test]
fn quick_period_with_injected_today() {
    let session = loaded();
    let week = session
        .analyze_period(QuickPeriod::Week, day(2024, 3, 14))
        .unwrap();
    assert_eq!(week.range, DateRange::new(day(2024, 3, 7), day(2024, 3, 14)));
    assert_eq!(week.records.len(), 6);

    let all = session
        .analyze_period(QuickPeriod::All, day(2024, 6, 1))
        .unwrap();
    assert_eq!(all.records.len(), 10);
}

#[test]
fn malformed_rows_are_skipped_silently() {
    let mut session = Session::new();
    let text = format!("{TEN_DAYS}x,abc,100,102,99,1.2\n,,,,,\n2024-03-15,oops,1,1,1,1\n");
    assert_eq!(session.load(&text).len(), 10);
}

#[test]
fn scalar_properties() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    assert!((standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.0).abs() < TOL);
    assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0]), 1.0);
    assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0]), 2.0);
}

#[test]
fn report_for_ten_days() {
    let session = loaded();
    let analysis = session
        .analyze(DateRange::new(day(2024, 3, 1), day(2024, 3, 14)))
        .unwrap();
    let sections = report_sections(&analysis.summary, &[1.0, 2.0, 3.0]);
    assert_eq!(sections[0].lines[0], "Average Volatility: 2.00%");
    assert_eq!(sections[1].lines[0], "Average Price: 12.00");
    assert_eq!(sections[1].lines[2], "Mode Price: 12.00");
    // sqrt(2.4) = 1.549...
    assert_eq!(sections[1].lines[3], "±1 SD Price: 10.45 to 13.55");
}

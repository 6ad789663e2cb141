use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use rusty_ticker::config::ViewerConfig;
use rusty_ticker::stats::{report_sections, ReportSection, StatisticsSummary};
use rusty_ticker::{Analysis, AnalysisError, DateRange, QuickPeriod, Session};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Owns the loaded dataset.
    pub session: Session,

    /// Display settings.
    pub config: ViewerConfig,

    /// Date picker values.
    pub start: NaiveDate,
    pub end: NaiveDate,

    /// Highlighted quick-period button, if the range came from one.
    pub active_period: Option<QuickPeriod>,

    /// Result of the last successful analysis (cleared on empty selection).
    pub analysis: Option<Analysis>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ViewerConfig, today: NaiveDate) -> Self {
        Self {
            session: Session::new(),
            config,
            start: today,
            end: today,
            active_period: None,
            analysis: None,
            status_message: None,
        }
    }

    /// Reset the pickers to the new dataset's span, then apply the default
    /// quick period.
    pub fn on_dataset_loaded(&mut self, today: NaiveDate) {
        if let Some(span) = self.session.dataset().and_then(|ds| ds.date_span()) {
            self.start = span.start;
            self.end = span.end;
        }
        self.status_message = None;
        self.apply_period(self.config.default_period, today);
    }

    /// Load a CSV file into the session.
    pub fn load_file(&mut self, path: &Path, today: NaiveDate) {
        match self.session.load_file(path) {
            Ok(_) => self.on_dataset_loaded(today),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Quick-period button: move the pickers and analyze.
    pub fn apply_period(&mut self, period: QuickPeriod, today: NaiveDate) {
        self.active_period = Some(period);
        let range = self
            .session
            .dataset()
            .and_then(|ds| period.range(today, ds));

        match range {
            Some(range) => {
                self.start = range.start;
                self.end = range.end;
                self.run_analysis(range);
            }
            None => self.report_failure(AnalysisError::EmptySelection),
        }
    }

    /// Analyze button: use whatever the pickers hold.
    pub fn analyze_selected(&mut self) {
        self.active_period = None;
        self.run_analysis(DateRange::new(self.start, self.end));
    }

    fn run_analysis(&mut self, range: DateRange) {
        match self.session.analyze(range) {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.status_message = None;
            }
            Err(e) => self.report_failure(e),
        }
    }

    fn report_failure(&mut self, error: AnalysisError) {
        log::warn!("{error}");
        self.analysis = None;
        self.status_message = Some(error.to_string());
    }

    /// Report text for the current analysis.
    pub fn report(&self) -> Vec<ReportSection> {
        self.analysis
            .as_ref()
            .map(|a| report_sections(&a.summary, &self.config.band_multipliers))
            .unwrap_or_default()
    }

    /// Write the current statistics and report text as JSON.
    pub fn export_report(&self, path: &Path) -> Result<()> {
        let analysis = self
            .analysis
            .as_ref()
            .context("nothing to export: no analysis result")?;

        let export = ReportExport {
            range: analysis.range,
            record_count: analysis.records.len(),
            summary: &analysis.summary,
            sections: self.report(),
        };
        let json = serde_json::to_string_pretty(&export).context("serializing report")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!("Exported report to {}", path.display());
        Ok(())
    }
}

#[derive(Serialize)]
struct ReportExport<'a> {
    range: DateRange,
    record_count: usize,
    summary: &'a StatisticsSummary,
    sections: Vec<ReportSection>,
}

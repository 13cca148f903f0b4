// Runs every entity kind's growth report and assembles the final document.
use shared::models::{ComparisonRecord, Report};
use std::path::Path;

use super::growth_report::GrowthReporter;
use crate::config::settings::ReportSettings;
use crate::data::json_writer::write_report;
use crate::error::Result;

pub struct ReportService {
    settings: ReportSettings,
}

impl ReportService {
    pub fn new(settings: ReportSettings) -> Self {
        ReportService { settings }
    }

    /// Builds the report without writing it. Any entity kind failing aborts
    /// the whole report; no partial document is returned.
    pub fn generate(&self) -> Result<Report> {
        let mut sections = Vec::new();
        for (profile, csv_path) in self.settings.sources() {
            let reporter = GrowthReporter::new(profile);
            let records = reporter.load_and_calculate(&csv_path).map_err(|e| {
                tracing::error!(
                    entity_kind = %reporter.label(),
                    path = %csv_path.display(),
                    error_kind = e.kind(),
                    error_detail = %e,
                    "Growth report generation aborted"
                );
                e
            })?;
            sections.push((reporter.label().to_string(), records));
        }
        Ok(assemble_report(sections))
    }

    pub fn run(&self) -> Result<Report> {
        let report = self.generate()?;
        write_report(&report, &self.settings.output_path)?;
        Ok(report)
    }

    pub fn output_path(&self) -> &Path {
        &self.settings.output_path
    }
}

pub fn assemble_report(sections: impl IntoIterator<Item = (String, Vec<ComparisonRecord>)>) -> Report {
    let mut report = Report::new();
    for (label, records) in sections {
        report.insert(label, records);
    }
    report
}

// Report entry point: builds the growth report once and writes it to disk.
use anyhow::Context;
use engine::{ReportService, ReportSettings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting sales growth report...");

    let settings = ReportSettings::load_from_env().context("Failed to load report settings")?;
    info!(
        product_csv = %settings.product_csv_path.display(),
        brand_csv = %settings.brand_csv_path.display(),
        output = %settings.output_path.display(),
        "Report settings resolved"
    );

    let service = ReportService::new(settings);
    let report = service
        .run()
        .with_context(|| format!("Failed to build report at '{}'", service.output_path().display()))?;

    for section in report.sections() {
        info!(entity_kind = %section.label, records = section.records.len(), "Report section written");
    }
    Ok(())
}

// Writes the assembled report as a pretty-printed JSON document.
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use shared::models::Report;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{EngineError, Result};

const INDENT: &[u8] = b"    ";

pub fn write_report_to<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut serializer = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut serializer)?;
    Ok(())
}

pub fn render_report(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_report_to(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| EngineError::ProcessingError(format!("Report is not valid UTF-8: {}", e)))
}

// Creates the parent directory when it does not exist yet.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    tracing::info!(path = %path.display(), "Attempting to build a JSON file with provided data");
    let mut writer = BufWriter::new(File::create(path)?);
    write_report_to(report, &mut writer)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), "JSON file successfully built");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{ComparisonRecord, EntityFields};

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.insert(
            "PRODUCT",
            vec![ComparisonRecord {
                previous_week_commencing_date: NaiveDate::from_ymd_opt(2021, 7, 4).unwrap(),
                current_week_commencing_date: NaiveDate::from_ymd_opt(2022, 7, 4).unwrap(),
                perc_gross_sales_growth: None,
                perc_unit_sales_growth: Some(-100.0),
                entity: EntityFields::new().with("barcode_no", "90432853").with("product_name", "Product D"),
            }],
        );
        report.insert("BRAND", Vec::new());
        report
    }

    #[test]
    fn test_render_report_layout() {
        let rendered = render_report(&sample_report()).unwrap();
        let expected = r#"{
    "PRODUCT": [
        {
            "previous_week_commencing_date": "2021-07-04",
            "current_week_commencing_date": "2022-07-04",
            "perc_gross_sales_growth": null,
            "perc_unit_sales_growth": -100.0,
            "barcode_no": "90432853",
            "product_name": "Product D"
        }
    ],
    "BRAND": []
}"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_write_report_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("results.json");

        write_report(&sample_report(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_report(&sample_report()).unwrap());
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["BRAND"], serde_json::json!([]));
    }
}

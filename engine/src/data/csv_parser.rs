use csv::{ReaderBuilder, StringRecord};
use shared::models::RawRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::entities::EntityProfile;
use crate::error::{EngineError, Result};
use super::record_source::RecordSource;

pub struct SalesCsvParser;

impl SalesCsvParser {
    // CSV Header (product): period_id,period_name,week_commencing_date,barcode_no,product_name,gross_sales,units_sold
    // Example Row: 1,previous,25/07/2021,60988638,Product A,314.31,38
    pub fn load_from_path(path: &Path, profile: &dyn EntityProfile) -> Result<RecordSource> {
        let file = File::open(path).map_err(|e| {
            tracing::error!(path = %path.display(), error_detail = %e, "Failed to open sales CSV");
            EngineError::from(e)
        })?;
        Self::parse(BufReader::new(file), &path.display().to_string(), profile)
    }

    pub fn parse<R: Read>(reader: R, source_name: &str, profile: &dyn EntityProfile) -> Result<RecordSource> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            tracing::warn!(source = %source_name, entity_kind = %profile.label(), "Sales CSV is empty");
            return Err(EngineError::EmptySource(source_name.to_string()));
        }
        Self::check_required_columns(&headers, profile)?;

        tracing::info!(source = %source_name, entity_kind = %profile.label(), "Parsing sales CSV");

        let mut source = RecordSource::new(profile.identifier_column());
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(idx + 2);
            source.push(Self::to_raw_record(&headers, &record, line))?;
        }

        tracing::info!(
            source = %source_name,
            entity_kind = %profile.label(),
            records = source.len(),
            identifiers = source.identifiers().len(),
            date_keys = source.date_keys().len(),
            "Sales CSV successfully parsed"
        );
        Ok(source)
    }

    // Header order does not matter; only presence is checked.
    fn check_required_columns(headers: &StringRecord, profile: &dyn EntityProfile) -> Result<()> {
        for column in profile.required_columns() {
            if !headers.iter().any(|header| header == column) {
                tracing::warn!(column = %column, entity_kind = %profile.label(), "Sales CSV lacks a required column");
                return Err(EngineError::MissingColumn {
                    column: column.to_string(),
                    line: 1,
                });
            }
        }
        Ok(())
    }

    fn to_raw_record(headers: &StringRecord, record: &StringRecord, line: usize) -> RawRecord {
        let fields: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        RawRecord::new(line, fields)
    }
}

// In-memory record source: every row of one sales table, plus the distinct
// identifiers and "dd/mm" date keys seen while loading it.
use shared::models::RawRecord;
use shared::utils::week_date::date_key;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::models::columns::{require_field, WEEK_COMMENCING_DATE};

#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    identifier_column: String,
    records: Vec<RawRecord>,
    identifiers: BTreeSet<String>,
    date_keys: BTreeSet<String>,
}

impl RecordSource {
    pub fn new(identifier_column: &str) -> Self {
        RecordSource {
            identifier_column: identifier_column.to_string(),
            ..Default::default()
        }
    }

    pub fn from_records(identifier_column: &str, records: impl IntoIterator<Item = RawRecord>) -> Result<Self> {
        let mut source = Self::new(identifier_column);
        for record in records {
            source.push(record)?;
        }
        Ok(source)
    }

    // Fails with MissingColumn if the record lacks the identifier or date column.
    pub fn push(&mut self, record: RawRecord) -> Result<()> {
        let identifier = require_field(&record, &self.identifier_column)?.to_string();
        let key = date_key(require_field(&record, WEEK_COMMENCING_DATE)?).to_string();

        self.identifiers.insert(identifier);
        self.date_keys.insert(key);
        self.records.push(record);
        Ok(())
    }

    pub fn identifier_column(&self) -> &str {
        &self.identifier_column
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn identifiers(&self) -> &BTreeSet<String> {
        &self.identifiers
    }

    pub fn date_keys(&self) -> &BTreeSet<String> {
        &self.date_keys
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

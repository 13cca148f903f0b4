// Groups a record source into (identifier, date key) cohorts
use shared::models::RawRecord;
use shared::utils::week_date::date_key;
use std::collections::HashMap;

use crate::data::record_source::RecordSource;
use crate::error::Result;
use crate::models::columns::{require_field, WEEK_COMMENCING_DATE};
use crate::models::Cohort;

/// Returns one cohort per (identifier, date key) pair that has at least one
/// record, identifiers ascending then date keys ascending. Records inside a
/// cohort keep their source order.
pub fn build_cohorts(source: &RecordSource) -> Result<Vec<Cohort<'_>>> {
    let mut index: HashMap<(&str, &str), Vec<&RawRecord>> = HashMap::new();
    for record in source.records() {
        let identifier = require_field(record, source.identifier_column())?;
        let key = date_key(require_field(record, WEEK_COMMENCING_DATE)?);
        index.entry((identifier, key)).or_default().push(record);
    }

    let mut cohorts = Vec::with_capacity(index.len());
    for identifier in source.identifiers() {
        for key in source.date_keys() {
            // Pairs with no records produce nothing.
            if let Some(records) = index.remove(&(identifier.as_str(), key.as_str())) {
                tracing::debug!(identifier = %identifier, date_key = %key, records = records.len(), "Results found, proceeding with data cleaning");
                cohorts.push(Cohort::new(identifier, key, records));
            }
        }
    }
    Ok(cohorts)
}

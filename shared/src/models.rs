use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

// One row of a sales table, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    // 1-based line in the source table (the header is line 1)
    pub line: usize,
    pub fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(line: usize, fields: HashMap<String, String>) -> Self {
        RawRecord { line, fields }
    }

    pub fn from_pairs<K, V>(line: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        RawRecord {
            line,
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Descriptive fields copied onto a comparison record for one entity kind.
///
/// Insertion order is kept so the serialized output lists fields in the order
/// the entity profile attached them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFields(Vec<(String, String)>);

impl EntityFields {
    pub fn new() -> Self {
        EntityFields(Vec::new())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    // Replaces the value when the key is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for EntityFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// Period-over-period comparison for one entity on one calendar week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRecord {
    pub previous_week_commencing_date: NaiveDate,
    pub current_week_commencing_date: NaiveDate,
    pub perc_gross_sales_growth: Option<f64>,
    pub perc_unit_sales_growth: Option<f64>,
    #[serde(flatten)]
    pub entity: EntityFields,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub label: String,
    pub records: Vec<ComparisonRecord>,
}

/// The final output: entity-kind label mapped to its sorted comparison records.
///
/// Serializes as a single object whose keys appear in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new() -> Self {
        Report { sections: Vec::new() }
    }

    pub fn insert(&mut self, label: impl Into<String>, records: Vec<ComparisonRecord>) {
        let label = label.into();
        match self.sections.iter_mut().find(|s| s.label == label) {
            Some(section) => section.records = records,
            None => self.sections.push(ReportSection { label, records }),
        }
    }

    pub fn section(&self, label: &str) -> Option<&[ComparisonRecord]> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.records.as_slice())
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.label.as_str())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.label, &section.records)?;
        }
        map.end()
    }
}

use shared::models::RawRecord;

/// All records for one entity identifier on one "dd/mm" date key.
///
/// Records keep their source order. A cohort built by the cohort builder is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Cohort<'a> {
    pub identifier: &'a str,
    pub date_key: &'a str,
    pub records: Vec<&'a RawRecord>,
}

impl<'a> Cohort<'a> {
    pub fn new(identifier: &'a str, date_key: &'a str, records: Vec<&'a RawRecord>) -> Self {
        Cohort { identifier, date_key, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Descriptive fields are taken from here; they do not vary across periods.
    pub fn representative(&self) -> Option<&'a RawRecord> {
        self.records.first().copied()
    }

    pub fn lines(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.line).collect()
    }
}

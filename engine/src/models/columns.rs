// Column names every sales table carries, whatever the entity kind.
use shared::models::RawRecord;

use crate::error::{EngineError, Result};

pub const WEEK_COMMENCING_DATE: &str = "week_commencing_date";
pub const PERIOD_ID: &str = "period_id";
pub const GROSS_SALES: &str = "gross_sales";
pub const UNITS_SOLD: &str = "units_sold";

pub const COMMON_COLUMNS: [&str; 4] = [WEEK_COMMENCING_DATE, PERIOD_ID, GROSS_SALES, UNITS_SOLD];

// Any other period_id is treated as the current period.
pub const PREVIOUS_PERIOD_ID: &str = "1";

pub fn require_field<'a>(record: &'a RawRecord, column: &str) -> Result<&'a str> {
    record.get(column).ok_or_else(|| EngineError::MissingColumn {
        column: column.to_string(),
        line: record.line,
    })
}

pub fn is_previous_period(record: &RawRecord) -> Result<bool> {
    Ok(require_field(record, PERIOD_ID)? == PREVIOUS_PERIOD_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_present() {
        let record = RawRecord::from_pairs(3, [(PERIOD_ID, "2")]);
        assert_eq!(require_field(&record, PERIOD_ID).unwrap(), "2");
    }

    #[test]
    fn test_require_field_missing_reports_line() {
        let record = RawRecord::from_pairs(7, [(PERIOD_ID, "2")]);
        match require_field(&record, GROSS_SALES) {
            Err(EngineError::MissingColumn { column, line }) => {
                assert_eq!(column, GROSS_SALES);
                assert_eq!(line, 7);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_is_previous_period() {
        assert!(is_previous_period(&RawRecord::from_pairs(2, [(PERIOD_ID, "1")])).unwrap());
        assert!(!is_previous_period(&RawRecord::from_pairs(2, [(PERIOD_ID, "2")])).unwrap());
        assert!(!is_previous_period(&RawRecord::from_pairs(2, [(PERIOD_ID, "")])).unwrap());
        assert!(!is_previous_period(&RawRecord::from_pairs(2, [(PERIOD_ID, " 1")])).unwrap());
    }
}

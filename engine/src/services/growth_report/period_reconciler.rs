// Turns a cohort of one or two period observations into dates and growth figures.
use chrono::NaiveDate;
use shared::models::{ComparisonRecord, EntityFields, RawRecord};
use shared::utils::sales_figures::parse_metric;
use shared::utils::week_date::{parse_week_date, shift_years};

use super::growth::calculate_growth;
use crate::error::{EngineError, Result};
use crate::models::columns::{is_previous_period, require_field, GROSS_SALES, UNITS_SOLD, WEEK_COMMENCING_DATE};
use crate::models::Cohort;

// A previous-period observation with no current counterpart counts as a total loss.
pub const FULL_LOSS_GROWTH: f64 = -100.0;

/// The date and metric half of a comparison record.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodComparison {
    pub previous_week_commencing_date: NaiveDate,
    pub current_week_commencing_date: NaiveDate,
    pub perc_gross_sales_growth: Option<f64>,
    pub perc_unit_sales_growth: Option<f64>,
}

impl PeriodComparison {
    pub fn into_record(self, entity: EntityFields) -> ComparisonRecord {
        ComparisonRecord {
            previous_week_commencing_date: self.previous_week_commencing_date,
            current_week_commencing_date: self.current_week_commencing_date,
            perc_gross_sales_growth: self.perc_gross_sales_growth,
            perc_unit_sales_growth: self.perc_unit_sales_growth,
            entity,
        }
    }
}

pub fn reconcile_periods(cohort: &Cohort<'_>) -> Result<PeriodComparison> {
    tracing::debug!(
        identifier = %cohort.identifier,
        date_key = %cohort.date_key,
        lines = ?cohort.lines(),
        "cleaning cohort"
    );

    match cohort.records.as_slice() {
        [] => Err(EngineError::ProcessingError(format!(
            "Empty cohort for identifier '{}' on {}",
            cohort.identifier, cohort.date_key
        ))),
        [record] => reconcile_single(record),
        [first, second] => {
            let (previous, current) = match (is_previous_period(first)?, is_previous_period(second)?) {
                (true, false) => (*first, *second),
                (false, true) => (*second, *first),
                (true, true) => return Err(ambiguous(cohort, "both records are previous-period observations")),
                (false, false) => return Err(ambiguous(cohort, "neither record is a previous-period observation")),
            };
            reconcile_pair(cohort, previous, current)
        }
        records => Err(ambiguous(
            cohort,
            &format!("{} records found, expected at most one per period", records.len()),
        )),
    }
}

fn reconcile_single(record: &RawRecord) -> Result<PeriodComparison> {
    let date = parse_record_date(record)?;

    if is_previous_period(record)? {
        Ok(PeriodComparison {
            previous_week_commencing_date: date,
            current_week_commencing_date: shift_record_date(record, date, 1)?,
            perc_gross_sales_growth: Some(FULL_LOSS_GROWTH),
            perc_unit_sales_growth: Some(FULL_LOSS_GROWTH),
        })
    } else {
        Ok(PeriodComparison {
            previous_week_commencing_date: shift_record_date(record, date, -1)?,
            current_week_commencing_date: date,
            perc_gross_sales_growth: None,
            perc_unit_sales_growth: None,
        })
    }
}

fn reconcile_pair(cohort: &Cohort<'_>, previous: &RawRecord, current: &RawRecord) -> Result<PeriodComparison> {
    Ok(PeriodComparison {
        previous_week_commencing_date: parse_record_date(previous)?,
        current_week_commencing_date: parse_record_date(current)?,
        perc_gross_sales_growth: metric_growth(cohort, previous, current, GROSS_SALES)?,
        perc_unit_sales_growth: metric_growth(cohort, previous, current, UNITS_SOLD)?,
    })
}

// Blank or zero on both sides means there is nothing to compare. A blank on one
// side, or a zero baseline against real sales, has no defined percentage either
// and is reported as null.
fn metric_growth(cohort: &Cohort<'_>, previous: &RawRecord, current: &RawRecord, column: &str) -> Result<Option<f64>> {
    let previous_value = parse_record_metric(previous, column)?;
    let current_value = parse_record_metric(current, column)?;

    match (previous_value, current_value) {
        (Some(p), Some(c)) if p != 0.0 => calculate_growth(p, c).map(Some),
        (None, None) => Ok(None),
        (Some(p), Some(c)) if p == 0.0 && c == 0.0 => Ok(None),
        (p, c) => {
            tracing::warn!(
                identifier = %cohort.identifier,
                date_key = %cohort.date_key,
                column = %column,
                previous = ?p,
                current = ?c,
                "Growth is undefined for this metric, reporting null"
            );
            Ok(None)
        }
    }
}

fn parse_record_date(record: &RawRecord) -> Result<NaiveDate> {
    let value = require_field(record, WEEK_COMMENCING_DATE)?;
    parse_week_date(value).map_err(|source| EngineError::MalformedDate {
        value: value.to_string(),
        line: record.line,
        source,
    })
}

fn shift_record_date(record: &RawRecord, date: NaiveDate, years: i32) -> Result<NaiveDate> {
    shift_years(date, years).ok_or_else(|| {
        EngineError::ProcessingError(format!(
            "Cannot shift week_commencing_date {} by {} year(s) at line {}",
            date, years, record.line
        ))
    })
}

fn parse_record_metric(record: &RawRecord, column: &str) -> Result<Option<f64>> {
    let value = require_field(record, column)?;
    parse_metric(value).map_err(|_| EngineError::MalformedNumber {
        column: column.to_string(),
        value: value.to_string(),
        line: record.line,
    })
}

fn ambiguous(cohort: &Cohort<'_>, reason: &str) -> EngineError {
    tracing::warn!(identifier = %cohort.identifier, date_key = %cohort.date_key, reason, "Ambiguous cohort");
    EngineError::AmbiguousCohort {
        identifier: cohort.identifier.to_string(),
        date_key: cohort.date_key.to_string(),
        reason: reason.to_string(),
        lines: cohort.lines(),
    }
}

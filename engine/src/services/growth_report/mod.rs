// Growth report pipeline for one entity kind:
// cohorts -> period reconciliation -> enrichment -> sort.
use shared::models::ComparisonRecord;
use std::path::Path;

use crate::data::csv_parser::SalesCsvParser;
use crate::data::record_source::RecordSource;
use crate::entities::EntityProfile;
use crate::error::{EngineError, Result};
use crate::models::Cohort;

pub mod cohort_builder;
pub mod growth;
pub mod period_reconciler;
pub mod report_sorter;

use cohort_builder::build_cohorts;
use period_reconciler::reconcile_periods;
use report_sorter::sort_records;

pub struct GrowthReporter {
    profile: Box<dyn EntityProfile>,
}

impl GrowthReporter {
    pub fn new(profile: Box<dyn EntityProfile>) -> Self {
        GrowthReporter { profile }
    }

    pub fn profile(&self) -> &dyn EntityProfile {
        self.profile.as_ref()
    }

    pub fn label(&self) -> &str {
        self.profile.label()
    }

    pub fn load_and_calculate(&self, csv_path: &Path) -> Result<Vec<ComparisonRecord>> {
        let source = SalesCsvParser::load_from_path(csv_path, self.profile())?;
        self.calculate(&source)
    }

    /// Every cohort in `source` reconciled, enriched and sorted. Any failing
    /// cohort fails the whole entity kind.
    pub fn calculate(&self, source: &RecordSource) -> Result<Vec<ComparisonRecord>> {
        let span = tracing::info_span!("growth_report", entity_kind = %self.label());
        let _enter = span.enter();

        if source.identifier_column() != self.profile.identifier_column() {
            return Err(EngineError::ConfigError(format!(
                "Record source is keyed by '{}' but {} reports are keyed by '{}'",
                source.identifier_column(),
                self.label(),
                self.profile.identifier_column()
            )));
        }

        let cohorts = build_cohorts(source)?;
        let mut records = Vec::with_capacity(cohorts.len());
        for cohort in &cohorts {
            records.push(build_comparison(cohort, self.profile())?);
        }
        tracing::debug!(records = records.len(), "Unsorted data ready");

        sort_records(&mut records, self.profile());
        tracing::info!(records = records.len(), "data successfully sorted");
        Ok(records)
    }
}

pub fn build_comparison(cohort: &Cohort<'_>, profile: &dyn EntityProfile) -> Result<ComparisonRecord> {
    let periods = reconcile_periods(cohort)?;
    // reconcile_periods rejects empty cohorts, so a representative exists here.
    let representative = cohort.representative().ok_or_else(|| {
        EngineError::ProcessingError(format!("Empty cohort for identifier '{}'", cohort.identifier))
    })?;
    let entity = profile.enrich(representative)?;
    Ok(periods.into_record(entity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{BrandProfile, ProductProfile};
    use chrono::NaiveDate;

    const PRODUCT_CSV: &str = "\
period_id,period_name,week_commencing_date,barcode_no,product_name,gross_sales,units_sold
2,current,18/07/2022,59842899,Product B,303.78,26
1,previous,25/07/2021,60988638,Product A,314.31,38
2,current,25/07/2022,60988638,Product A,303.78,26
1,current,11/07/2022,87149829,Product C,303.78,26
1,previous,04/07/2021,90432853,Product D,0,0
2,current,04/07/2022,90432853,Product D,0,0
";

    fn product_records() -> Vec<ComparisonRecord> {
        let source = SalesCsvParser::parse(PRODUCT_CSV.as_bytes(), "inline", &ProductProfile).unwrap();
        GrowthReporter::new(Box::new(ProductProfile)).calculate(&source).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_products_sorted_by_name() {
        let records = product_records();
        let names: Vec<&str> = records.iter().map(|r| r.entity.get("product_name").unwrap()).collect();
        assert_eq!(names, vec!["Product A", "Product B", "Product C", "Product D"]);
    }

    #[test]
    fn test_product_records_match_expected_policy() {
        let records = product_records();

        let a = &records[0];
        assert_eq!(a.entity.get("barcode_no"), Some("60988638"));
        assert_eq!(a.previous_week_commencing_date, ymd(2021, 7, 25));
        assert_eq!(a.current_week_commencing_date, ymd(2022, 7, 25));
        assert_eq!(a.perc_gross_sales_growth, Some(-3.35));
        assert_eq!(a.perc_unit_sales_growth, Some(-31.58));

        let b = &records[1];
        assert_eq!(b.previous_week_commencing_date, ymd(2021, 7, 18));
        assert_eq!(b.perc_gross_sales_growth, None);

        let c = &records[2];
        assert_eq!(c.previous_week_commencing_date, ymd(2022, 7, 11));
        assert_eq!(c.current_week_commencing_date, ymd(2023, 7, 11));
        assert_eq!(c.perc_unit_sales_growth, Some(-100.0));

        let d = &records[3];
        assert_eq!(d.perc_gross_sales_growth, None);
        assert_eq!(d.perc_unit_sales_growth, None);
    }

    #[test]
    fn test_same_entity_sorted_by_current_week() {
        let csv = "\
period_id,week_commencing_date,brand_id,brand,gross_sales,units_sold
2,25/07/2022,1,Brand A,10,1
2,04/07/2022,1,Brand A,10,1
2,18/07/2022,1,Brand A,10,1
";
        let source = SalesCsvParser::parse(csv.as_bytes(), "inline", &BrandProfile).unwrap();
        let records = GrowthReporter::new(Box::new(BrandProfile)).calculate(&source).unwrap();
        let weeks: Vec<NaiveDate> = records.iter().map(|r| r.current_week_commencing_date).collect();
        assert_eq!(weeks, vec![ymd(2022, 7, 4), ymd(2022, 7, 18), ymd(2022, 7, 25)]);
    }

    #[test]
    fn test_ambiguous_cohort_fails_the_entity_kind() {
        let csv = "\
period_id,week_commencing_date,brand_id,brand,gross_sales,units_sold
2,18/07/2022,2,Brand B,303.78,26
1,25/07/2021,1,Brand A,314.31,38
1,25/07/2022,1,Brand A,303.78,26
";
        let source = SalesCsvParser::parse(csv.as_bytes(), "inline", &BrandProfile).unwrap();
        let result = GrowthReporter::new(Box::new(BrandProfile)).calculate(&source);
        assert!(matches!(result, Err(EngineError::AmbiguousCohort { .. })));
    }

    #[test]
    fn test_mismatched_source_is_rejected() {
        let source = RecordSource::new("brand_id");
        let result = GrowthReporter::new(Box::new(ProductProfile)).calculate(&source);
        assert!(matches!(result, Err(EngineError::ConfigError(_))));
    }
}

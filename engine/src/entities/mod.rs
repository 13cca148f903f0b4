// Entity kinds the report covers
pub mod brand;
pub mod product;

pub use brand::BrandProfile;
pub use product::ProductProfile;

use shared::models::{ComparisonRecord, EntityFields, RawRecord};

use crate::error::Result;
use crate::models::columns::{require_field, COMMON_COLUMNS};

/// Everything that differs between entity kinds.
///
/// The reconciliation pipeline is written once against this trait. Supporting
/// a new kind means adding one implementation; nothing else changes.
pub trait EntityProfile {
    /// Report section label, e.g. "PRODUCT".
    fn label(&self) -> &str;

    /// Column whose value identifies one entity.
    fn identifier_column(&self) -> &str;

    /// `(output field, source column)` pairs copied onto every comparison
    /// record, in output order.
    fn field_mapping(&self) -> &[(&'static str, &'static str)];

    /// Output field holding the entity's display name; the primary sort key.
    fn sort_field(&self) -> &str;

    fn required_columns(&self) -> Vec<&str> {
        let mut columns = vec![self.identifier_column()];
        columns.extend(COMMON_COLUMNS);
        for &(_, source) in self.field_mapping() {
            if !columns.contains(&source) {
                columns.push(source);
            }
        }
        columns
    }

    fn enrich(&self, record: &RawRecord) -> Result<EntityFields> {
        let mut fields = EntityFields::new();
        for (output, source) in self.field_mapping() {
            fields.insert(*output, require_field(record, source)?);
        }
        Ok(fields)
    }

    fn sort_name<'r>(&self, record: &'r ComparisonRecord) -> &'r str {
        record.entity.get(self.sort_field()).unwrap_or_default()
    }
}

// Brands carry their display name in the `brand` column; the report calls it `brand_name`.
use super::EntityProfile;

const FIELD_MAPPING: [(&str, &str); 2] = [("brand_id", "brand_id"), ("brand_name", "brand")];

pub struct BrandProfile;

impl BrandProfile {
    pub const LABEL: &'static str = "BRAND";
    pub const IDENTIFIER_COLUMN: &'static str = "brand_id";
    pub const NAME_FIELD: &'static str = "brand_name";
}

impl EntityProfile for BrandProfile {
    fn label(&self) -> &str {
        Self::LABEL
    }

    fn identifier_column(&self) -> &str {
        Self::IDENTIFIER_COLUMN
    }

    fn field_mapping(&self) -> &[(&'static str, &'static str)] {
        &FIELD_MAPPING
    }

    fn sort_field(&self) -> &str {
        Self::NAME_FIELD
    }
}

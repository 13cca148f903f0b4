// Products are identified by barcode and sorted by product name.
use super::EntityProfile;

const FIELD_MAPPING: [(&str, &str); 2] = [("barcode_no", "barcode_no"), ("product_name", "product_name")];

pub struct ProductProfile;

impl ProductProfile {
    pub const LABEL: &'static str = "PRODUCT";
    pub const IDENTIFIER_COLUMN: &'static str = "barcode_no";
    pub const NAME_FIELD: &'static str = "product_name";
}

impl EntityProfile for ProductProfile {
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

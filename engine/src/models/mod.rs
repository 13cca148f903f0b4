// Engine-internal models. Shared output models live in `shared::models`.
pub mod cohort;
pub mod columns;

pub use cohort::Cohort;

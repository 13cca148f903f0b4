// Engine library root
// Sales growth reporting: CSV record sources in, one JSON growth report out.

pub mod config;
pub mod data;
pub mod entities;
pub mod error;
pub mod models;
pub mod services;

pub use config::settings::ReportSettings;
pub use error::EngineError;
pub use services::ReportService;

// Services exposed by the engine
pub mod growth_report;
pub mod report_service;

pub use growth_report::GrowthReporter;
pub use report_service::ReportService;

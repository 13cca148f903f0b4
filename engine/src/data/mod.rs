// Input and output adapters around the reconciliation pipeline
pub mod csv_parser;
pub mod json_writer;
pub mod record_source;

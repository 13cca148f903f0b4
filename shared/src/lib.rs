pub mod models;
pub mod utils;

// Models and parsing helpers used by the engine's reconciliation pipeline.
// Nothing in here touches the filesystem or logging; that stays in `engine`.

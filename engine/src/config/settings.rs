// Report settings, loaded from an optional JSON file with defaults for every field
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entities::{BrandProfile, EntityProfile, ProductProfile};
use crate::error::{EngineError, Result};

pub const SETTINGS_FILE: &str = "report_settings.json";
pub const OUTPUT_PATH_ENV: &str = "REPORT_OUTPUT_PATH";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSettings {
    pub product_csv_path: PathBuf,
    pub brand_csv_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            product_csv_path: PathBuf::from("data/sales_product.csv"),
            brand_csv_path: PathBuf::from("data/sales_brand.csv"),
            output_path: PathBuf::from("output/results.json"),
        }
    }
}

impl ReportSettings {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| EngineError::ConfigError(format!("Failed to read settings file '{}': {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| EngineError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e)))
    }

    // A missing file is not an error; the defaults apply.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file found, using defaults");
            return Ok(Self::default());
        }
        let settings = Self::from_json_file(path)?;
        tracing::info!(path = %path.display(), "Loaded report settings");
        Ok(settings)
    }

    // Only the output location can be set from the environment.
    pub fn with_output_override(mut self, output_path: Option<String>) -> Self {
        if let Some(path) = output_path.filter(|p| !p.trim().is_empty()) {
            self.output_path = PathBuf::from(path);
        }
        self
    }

    pub fn load_from_env() -> Result<Self> {
        let settings = Self::load(Path::new(SETTINGS_FILE))?;
        Ok(settings.with_output_override(std::env::var(OUTPUT_PATH_ENV).ok()))
    }

    /// Entity profiles paired with their input table, in report order.
    pub fn sources(&self) -> Vec<(Box<dyn EntityProfile>, PathBuf)> {
        vec![
            (Box::new(ProductProfile), self.product_csv_path.clone()),
            (Box::new(BrandProfile), self.brand_csv_path.clone()),
        ]
    }
}

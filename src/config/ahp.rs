//! AHP configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the pairwise matrix and subcriteria tables come from
#[derive(Debug, Clone, Deserialize)]
pub struct AhpConfig {
    /// JSON file holding the pairwise comparison matrix
    #[serde(default = "default_pairwise_matrix_path")]
    pub pairwise_matrix_path: PathBuf,

    /// Optional YAML file overriding the reference subcriteria tables
    #[serde(default)]
    pub subcriteria_path: Option<PathBuf>,

    /// Write the default matrix when the matrix file does not exist yet
    #[serde(default = "default_seed_default_matrix")]
    pub seed_default_matrix: bool,
}

impl AhpConfig {
    /// Validate AHP configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !has_extension(&self.pairwise_matrix_path, &["json"]) {
            return Err(ValidationError::InvalidMatrixPath);
        }
        if let Some(path) = &self.subcriteria_path {
            if !has_extension(path, &["yaml", "yml"]) {
                return Err(ValidationError::InvalidSubcriteriaPath);
            }
        }
        Ok(())
    }
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            pairwise_matrix_path: default_pairwise_matrix_path(),
            subcriteria_path: None,
            seed_default_matrix: default_seed_default_matrix(),
        }
    }
}

fn default_pairwise_matrix_path() -> PathBuf {
    PathBuf::from("asset/pairwise.json")
}

fn default_seed_default_matrix() -> bool {
    true
}

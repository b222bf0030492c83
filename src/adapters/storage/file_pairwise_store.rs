//! File-based Pairwise Matrix Store
//!
//! Keeps the pairwise comparison matrix in a JSON document:
//!
//! ```json
//! { "pairwise": [[1.0, 3.0], [0.3333, 1.0]] }
//! ```
//!
//! Writes go to a sibling temp file that is then renamed over the target, so
//! readers see either the old or the new matrix, never a torn write.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::ahp::{AhpError, PairwiseMatrix};
use crate::ports::{PairwiseMatrixStore, PairwiseStoreError};

#[derive(Serialize)]
struct PairwiseDocument<'a> {
    pairwise: &'a PairwiseMatrix,
}

/// Rows are read unchecked so shape errors surface as `InvalidMatrix`
/// rather than as JSON syntax errors.
#[derive(Deserialize)]
struct RawPairwiseDocument {
    pairwise: Vec<Vec<f64>>,
}

fn invalid_matrix(err: AhpError) -> PairwiseStoreError {
    match err {
        AhpError::InvalidInput { field, message } => {
            PairwiseStoreError::InvalidMatrix { field, message }
        }
        other => PairwiseStoreError::Deserialization(other.to_string()),
    }
}

/// File-backed storage for the pairwise matrix
#[derive(Debug, Clone)]
pub struct FilePairwiseMatrixStore {
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl FilePairwiseMatrixStore {
    /// Create a store reading and writing `path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FilePairwiseMatrixStore::new("asset/pairwise.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `matrix` only if no file exists yet. Returns true if it wrote.
    pub async fn seed_if_missing(
        &self,
        matrix: &PairwiseMatrix,
    ) -> Result<bool, PairwiseStoreError> {
        let _guard = self.lock.write().await;
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| PairwiseStoreError::Io(e.to_string()))?
        {
            return Ok(false);
        }
        self.write_atomic(matrix).await?;
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "pairwise.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Caller must hold the write lock.
    async fn write_atomic(&self, matrix: &PairwiseMatrix) -> Result<(), PairwiseStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PairwiseStoreError::Io(e.to_string()))?;
        }

        let document = PairwiseDocument { pairwise: matrix };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| PairwiseStoreError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| PairwiseStoreError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| PairwiseStoreError::Io(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl PairwiseMatrixStore for FilePairwiseMatrixStore {
    async fn load(&self) -> Result<PairwiseMatrix, PairwiseStoreError> {
        let _guard = self.lock.read().await;

        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PairwiseStoreError::NotFound(
                    self.path.display().to_string(),
                ))
            }
            Err(e) => return Err(PairwiseStoreError::Io(e.to_string())),
        };

        let document: RawPairwiseDocument = serde_json::from_str(&json)
            .map_err(|e| PairwiseStoreError::Deserialization(e.to_string()))?;

        PairwiseMatrix::new(document.pairwise).map_err(invalid_matrix)
    }

    async fn save(&self, matrix: &PairwiseMatrix) -> Result<(), PairwiseStoreError> {
        let _guard = self.lock.write().await;
        self.write_atomic(matrix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_matrix() -> PairwiseMatrix {
        PairwiseMatrix::new(vec![vec![1.0, 3.0], vec![1.0 / 3.0, 1.0]]).unwrap()
    }

    #[tokio::test]
    async fn save_then_load_returns_same_matrix() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePairwiseMatrixStore::new(temp_dir.path().join("pairwise.json"));

        store.save(&test_matrix()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), test_matrix());
    }

    #[tokio::test]
    async fn load_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePairwiseMatrixStore::new(temp_dir.path().join("missing.json"));

        let result = store.load().await;

        assert!(matches!(result, Err(PairwiseStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn load_malformed_json_fails_to_parse() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pairwise.json");
        std::fs::write(&path, r#"{"pairwise": [[1.0, 2.0]"#).unwrap();
        let store = FilePairwiseMatrixStore::new(&path);

        let result = store.load().await;

        assert!(matches!(result, Err(PairwiseStoreError::Deserialization(_))));
    }

    #[tokio::test]
    async fn load_non_square_matrix_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pairwise.json");
        std::fs::write(&path, r#"{"pairwise": [[1.0, 2.0, 3.0], [0.5, 1.0]]}"#).unwrap();
        let store = FilePairwiseMatrixStore::new(&path);

        let result = store.load().await;

        match result {
            Err(PairwiseStoreError::InvalidMatrix { field, .. }) => {
                assert_eq!(field, "pairwise[0]")
            }
            other => panic!("Expected InvalidMatrix, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn reads_document_with_pairwise_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pairwise.json");
        std::fs::write(&path, r#"{"pairwise": [[1, 2], [0.5, 1]]}"#).unwrap();
        let store = FilePairwiseMatrixStore::new(&path);

        let matrix = store.load().await.unwrap();

        assert_eq!(matrix.get(0, 1), Some(2.0));
    }

    #[tokio::test]
    async fn save_overwrites_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePairwiseMatrixStore::new(temp_dir.path().join("pairwise.json"));

        store.save(&PairwiseMatrix::uniform(2)).await.unwrap();
        store.save(&test_matrix()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), test_matrix());
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("asset/nested/pairwise.json");
        let store = FilePairwiseMatrixStore::new(path);

        store.save(&test_matrix()).await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn seed_only_writes_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePairwiseMatrixStore::new(temp_dir.path().join("pairwise.json"));

        assert!(store.seed_if_missing(&test_matrix()).await.unwrap());
        assert!(!store
            .seed_if_missing(&PairwiseMatrix::uniform(2))
            .await
            .unwrap());

        assert_eq!(store.load().await.unwrap(), test_matrix());
    }
}

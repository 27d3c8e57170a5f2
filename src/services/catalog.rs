//! Reference data access: the cocktail list and the ingredient catalog.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::alcohol::Alcohol;
use crate::models::cocktail::Cocktail;

const COCKTAILS_FILE: &str = "cocktails.json";
const ALCOHOLS_FILE: &str = "alcohols.json";

/// Source of reference recipes and catalog ingredients.
///
/// Every call returns a fresh snapshot; callers never cache across requests.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn cocktails(&self) -> Result<Vec<Cocktail>, CatalogError>;
    async fn alcohols(&self) -> Result<Vec<Alcohol>, CatalogError>;
}

/// Reads `cocktails.json` and `alcohols.json` from a data directory on each call.
pub struct JsonFileCatalog {
    data_dir: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    async fn cocktails(&self) -> Result<Vec<Cocktail>, CatalogError> {
        load_json(&self.data_dir.join(COCKTAILS_FILE)).await
    }

    async fn alcohols(&self) -> Result<Vec<Alcohol>, CatalogError> {
        load_json(&self.data_dir.join(ALCOHOLS_FILE)).await
    }
}

async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Loaded catalog file");
    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fixed snapshots held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    cocktails: Vec<Cocktail>,
    alcohols: Vec<Alcohol>,
}

impl InMemoryCatalog {
    pub fn new(cocktails: Vec<Cocktail>, alcohols: Vec<Alcohol>) -> Self {
        Self { cocktails, alcohols }
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn cocktails(&self) -> Result<Vec<Cocktail>, CatalogError> {
        Ok(self.cocktails.clone())
    }

    async fn alcohols(&self) -> Result<Vec<Alcohol>, CatalogError> {
        Ok(self.alcohols.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Constant-time lookup of catalog ingredients by id.
pub struct AlcoholIndex<'a> {
    by_id: HashMap<&'a str, &'a Alcohol>,
}

impl<'a> AlcoholIndex<'a> {
    /// Records without an id are skipped; on duplicate ids the last one wins.
    pub fn new(alcohols: &'a [Alcohol]) -> Self {
        let by_id = alcohols
            .iter()
            .filter_map(|a| a.id.as_deref().map(|id| (id, a)))
            .collect();
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Alcohol> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

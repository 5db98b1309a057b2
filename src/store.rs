use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::{
    fs,
    sync::{Mutex, MutexGuard},
};

use crate::models::{Product, Sale};

pub const PRODUCTS_FILE: &str = "productos.json";
pub const SALES_FILE: &str = "ventas.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt document {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A JSON array on disk, always read and written whole.
#[derive(Debug)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty collection if the document does not exist yet.
    /// Returns whether it had to be created.
    pub async fn ensure_exists(&self) -> Result<bool, StoreError> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        if exists {
            return Ok(false);
        }
        self.save(&[]).await?;
        Ok(true)
    }

    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the document with `items`. The bytes land in a sibling
    /// temp file first and are renamed over the target.
    pub async fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, body).await.map_err(write_err)?;
        fs::rename(&tmp, &self.path).await.map_err(write_err)?;
        Ok(())
    }
}

/// Both documents of the shop plus the lock that serializes writers.
#[derive(Debug)]
pub struct Store {
    products: JsonDocument<Product>,
    sales: JsonDocument<Sale>,
    write_lock: Mutex<()>,
}

impl Store {
    /// Opens the store under `data_dir`, creating the directory and any
    /// missing document.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)
            .await
            .map_err(|source| StoreError::Write {
                path: data_dir.to_path_buf(),
                source,
            })?;

        let store = Self {
            products: JsonDocument::new(data_dir.join(PRODUCTS_FILE)),
            sales: JsonDocument::new(data_dir.join(SALES_FILE)),
            write_lock: Mutex::new(()),
        };

        if store.products.ensure_exists().await? {
            tracing::info!(path = %store.products.path().display(), "created product document");
        }
        if store.sales.ensure_exists().await? {
            tracing::info!(path = %store.sales.path().display(), "created sale document");
        }

        Ok(store)
    }

    pub fn products(&self) -> &JsonDocument<Product> {
        &self.products
    }

    pub fn sales(&self) -> &JsonDocument<Sale> {
        &self.sales
    }

    /// Held by every mutating operation across its whole load -> save cycle.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

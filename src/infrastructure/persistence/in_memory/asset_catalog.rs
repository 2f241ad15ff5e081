//! # In-Memory Asset Catalog
//!
//! In-memory implementation of [`AssetCatalog`].

use crate::domain::entities::asset::AssetRecord;
use crate::domain::value_objects::AssetSymbol;
use crate::infrastructure::demo;
use crate::infrastructure::persistence::traits::{AssetCatalog, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`AssetCatalog`].
///
/// Uses a thread-safe `HashMap` keyed by symbol. Iteration order is restored
/// by sorting on symbol, keeping `all()` deterministic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetCatalog {
    storage: Arc<RwLock<HashMap<AssetSymbol, AssetRecord>>>,
}

impl InMemoryAssetCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with the demo entries.
    #[must_use]
    pub fn seeded() -> Self {
        let map: HashMap<AssetSymbol, AssetRecord> = demo::catalog()
            .into_iter()
            .map(|asset| (asset.symbol().clone(), asset))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AssetCatalog for InMemoryAssetCatalog {
    async fn all(&self) -> RepositoryResult<Vec<AssetRecord>> {
        let storage = self.storage.read().await;
        let mut assets: Vec<AssetRecord> = storage.values().cloned().collect();
        assets.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        Ok(assets)
    }

    async fn find(&self, symbol: &AssetSymbol) -> RepositoryResult<Option<AssetRecord>> {
        let storage = self.storage.read().await;
        Ok(storage.get(symbol).cloned())
    }

    async fn save(&self, asset: &AssetRecord) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(asset.symbol().clone(), asset.clone());
        Ok(())
    }
}

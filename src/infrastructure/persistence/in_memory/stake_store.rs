//! # In-Memory Stake Store
//!
//! In-memory implementation of [`StakeStore`].

use crate::domain::entities::stake::StakePosition;
use crate::domain::value_objects::Timestamp;
use crate::infrastructure::demo;
use crate::infrastructure::persistence::traits::{RepositoryResult, StakeStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`StakeStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStakeStore {
    storage: Arc<RwLock<Vec<StakePosition>>>,
}

impl InMemoryStakeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the demo stakes, relative to `now`.
    #[must_use]
    pub fn seeded(now: Timestamp) -> Self {
        Self {
            storage: Arc::new(RwLock::new(demo::active_stakes(now))),
        }
    }
}

#[async_trait]
impl StakeStore for InMemoryStakeStore {
    async fn active(&self) -> RepositoryResult<Vec<StakePosition>> {
        let storage = self.storage.read().await;
        Ok(storage.clone())
    }

    async fn save(&self, position: &StakePosition) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.push(position.clone());
        Ok(())
    }
}

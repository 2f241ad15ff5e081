//! # In-Memory Merchant Directory
//!
//! In-memory implementation of [`MerchantDirectory`].

use crate::domain::entities::payment::Merchant;
use crate::infrastructure::demo;
use crate::infrastructure::persistence::traits::{MerchantDirectory, RepositoryResult};
use async_trait::async_trait;
use std::sync::Arc;

/// In-memory implementation of [`MerchantDirectory`].
///
/// The directory is fixed at construction; QR codes only ever resolve to a
/// merchant that exists here.
#[derive(Debug, Clone)]
pub struct InMemoryMerchantDirectory {
    merchants: Arc<Vec<Merchant>>,
}

impl InMemoryMerchantDirectory {
    /// Creates a directory over the given merchants.
    #[must_use]
    pub fn new(merchants: Vec<Merchant>) -> Self {
        Self {
            merchants: Arc::new(merchants),
        }
    }

    /// Creates a directory with the demo merchants.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(demo::merchants())
    }
}

#[async_trait]
impl MerchantDirectory for InMemoryMerchantDirectory {
    async fn all(&self) -> RepositoryResult<Vec<Merchant>> {
        Ok(self.merchants.as_ref().clone())
    }
}

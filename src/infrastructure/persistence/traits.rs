//! # Repository Traits
//!
//! Async storage interfaces for reference data.

use crate::domain::entities::asset::AssetRecord;
use crate::domain::entities::payment::Merchant;
use crate::domain::entities::stake::StakePosition;
use crate::domain::value_objects::AssetSymbol;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// A uniqueness constraint was violated.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Catalog of assets available to add to the portfolio.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    /// Returns every catalog entry.
    async fn all(&self) -> RepositoryResult<Vec<AssetRecord>>;

    /// Returns the entry with the given symbol.
    async fn find(&self, symbol: &AssetSymbol) -> RepositoryResult<Option<AssetRecord>>;

    /// Inserts or replaces an entry.
    async fn save(&self, asset: &AssetRecord) -> RepositoryResult<()>;
}

/// Store of the user's stake positions.
#[async_trait]
pub trait StakeStore: Send + Sync {
    /// Returns all active positions.
    async fn active(&self) -> RepositoryResult<Vec<StakePosition>>;

    /// Appends a new position.
    async fn save(&self, position: &StakePosition) -> RepositoryResult<()>;
}

/// Directory of merchants resolvable from QR codes.
#[async_trait]
pub trait MerchantDirectory: Send + Sync {
    /// Returns every known merchant.
    async fn all(&self) -> RepositoryResult<Vec<Merchant>>;
}

//! # QR Scanner
//!
//! Async scanner trait plus the mock implementation.
//!
//! The mock models the prototype's camera screen: after a fixed simulated
//! delay it "detects" a random merchant from its directory. The delay is not
//! cancellable and has no timeout or retry; detection cannot fail unless the
//! directory is empty.

use crate::domain::entities::payment::Merchant;
use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;
use thiserror::Error;

/// Error type for scan operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The scanner has no merchants to resolve.
    #[error("no merchants available to detect")]
    NoMerchants,
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// A source of detected merchant QR codes.
#[async_trait]
pub trait QrScanner: Send + Sync {
    /// Waits for a code and resolves it to a merchant.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::NoMerchants` if nothing can ever be detected.
    async fn scan(&self) -> ScanResult<Merchant>;
}

/// Mock scanner that detects a random directory merchant after a delay.
#[derive(Debug, Clone)]
pub struct MockQrScanner {
    merchants: Vec<Merchant>,
    detect_delay: Duration,
}

impl MockQrScanner {
    /// Creates a mock scanner over a merchant directory.
    #[must_use]
    pub fn new(merchants: Vec<Merchant>, detect_delay: Duration) -> Self {
        Self {
            merchants,
            detect_delay,
        }
    }
}

#[async_trait]
impl QrScanner for MockQrScanner {
    async fn scan(&self) -> ScanResult<Merchant> {
        if self.merchants.is_empty() {
            return Err(ScanError::NoMerchants);
        }
        tokio::time::sleep(self.detect_delay).await;
        let index = rand::rng().random_range(0..self.merchants.len());
        let merchant = self
            .merchants
            .get(index)
            .cloned()
            .ok_or(ScanError::NoMerchants)?;
        tracing::debug!(merchant = %merchant.name, "qr code detected");
        Ok(merchant)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::MerchantId;

    fn directory() -> Vec<Merchant> {
        vec![
            Merchant::new(
                MerchantId::new("STARBUCKS_MY"),
                "Starbucks Coffee",
                "60123456789",
                "Food & Beverage",
                "KLCC, Kuala Lumpur",
            ),
            Merchant::new(
                MerchantId::new("SEVEN_ELEVEN"),
                "7-Eleven",
                "60198765432",
                "Convenience Store",
                "Bukit Bintang, KL",
            ),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn detects_a_directory_merchant() {
        let scanner = MockQrScanner::new(directory(), Duration::from_secs(3));
        let merchant = scanner.scan().await.unwrap();
        assert!(directory().iter().any(|m| m.id == merchant.id));
    }

    #[tokio::test]
    async fn empty_directory_fails() {
        let scanner = MockQrScanner::new(vec![], Duration::from_millis(1));
        assert_eq!(scanner.scan().await, Err(ScanError::NoMerchants));
    }
}

//! # Configuration
//!
//! Layered runtime configuration for the wallet engine.
//!
//! Hard defaults match the constants the prototype shipped with; an optional
//! `uniwallet.toml` and `UNIWALLET__*` environment variables override them.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::config::WalletConfig;
//!
//! let config = WalletConfig::default();
//! assert_eq!(config.latency.submit_delay().as_secs(), 2);
//! assert_eq!(config.staking.periods.len(), 4);
//! ```

use crate::domain::entities::stake::{StakingOption, StakingPeriod};
use crate::domain::services::fees::FeeSchedule;
use crate::domain::value_objects::{AssetSymbol, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Display precision settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for fiat amounts.
    pub fiat_dp: u32,
    /// Decimal places for crypto quantities.
    pub crypto_dp: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fiat_dp: 2,
            crypto_dp: 6,
        }
    }
}

/// Simulated latency settings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Form submission round-trip.
    pub submit_ms: u64,
    /// QR detection delay.
    pub scan_ms: u64,
    /// Lifetime of the "copied" confirmation flag.
    pub copied_flag_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            submit_ms: 2_000,
            scan_ms: 3_000,
            copied_flag_ms: 2_000,
        }
    }
}

impl LatencyConfig {
    /// Returns the submission delay as a [`Duration`].
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_ms)
    }

    /// Returns the scan delay as a [`Duration`].
    #[must_use]
    pub const fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_ms)
    }
}

/// Staking offer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingConfig {
    /// Stakeable assets.
    pub options: Vec<StakingOption>,
    /// Offered lock periods.
    pub periods: Vec<StakingPeriod>,
}

impl Default for StakingConfig {
    fn default() -> Self {
        let option = |symbol: &str, name: &str, apy_tenths: i64, min: Decimal, available| {
            AssetSymbol::new(symbol).ok().and_then(|symbol| {
                Some(StakingOption {
                    symbol,
                    name: name.to_string(),
                    headline_apy_percent: Decimal::new(apy_tenths, 1),
                    min_stake: Quantity::new(min).ok()?,
                    available,
                })
            })
        };
        let options = [
            option("ETH", "Ethereum", 45, Decimal::new(1, 1), true),
            option("ADA", "Cardano", 52, Decimal::new(10, 0), true),
            option("DOT", "Polkadot", 125, Decimal::new(1, 0), false),
            option("SOL", "Solana", 78, Decimal::new(1, 2), false),
        ]
        .into_iter()
        .flatten()
        .collect();
        let periods = vec![
            StakingPeriod {
                days: 30,
                apy_percent: Decimal::new(45, 1),
            },
            StakingPeriod {
                days: 60,
                apy_percent: Decimal::new(52, 1),
            },
            StakingPeriod {
                days: 90,
                apy_percent: Decimal::new(68, 1),
            },
            StakingPeriod {
                days: 180,
                apy_percent: Decimal::new(85, 1),
            },
        ];
        Self { options, periods }
    }
}

/// Top-level wallet configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Per-network transfer fee schedule.
    pub fees: FeeSchedule,
    /// Staking offers.
    pub staking: StakingConfig,
    /// Display precision.
    pub display: DisplayConfig,
    /// Simulated latencies.
    pub latency: LatencyConfig,
}

impl WalletConfig {
    /// Loads configuration from defaults, an optional `uniwallet.toml`, and
    /// `UNIWALLET__*` environment variables, in increasing precedence.
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if a source fails to parse or the
    /// merged tree does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Self::default())?;
        config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("uniwallet").required(false))
            .add_source(config::Environment::with_prefix("UNIWALLET").separator("__"))
            .build()?
            .try_deserialize()
    }
}

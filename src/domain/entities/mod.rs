//! # Entities
//!
//! Per-screen aggregates with identity and lifecycle.
//!
//! Entities are constructed at screen mount and discarded at exit; there is
//! no persistence of record behind them. Lists are handed read-mostly from a
//! parent screen to a child.
//!
//! - [`asset::AssetRecord`] / [`portfolio::Portfolio`] — holdings and catalog
//! - [`transfer::TransferRequest`] — validated send-crypto request
//! - [`quote::ConversionQuote`] — bidirectionally consistent crypto/fiat pair
//! - [`stake::StakePosition`] — locked stake with reward projection
//! - [`payment::Merchant`] / [`payment::QrPayment`] — QR payment targets
//! - [`fiat::FiatAccount`] — RM balance with transaction history
//! - [`contact::Contact`] — recent transfer recipients
//! - [`profile::UserProfile`] — account holder details

pub mod asset;
pub mod contact;
pub mod fiat;
pub mod payment;
pub mod portfolio;
pub mod profile;
pub mod quote;
pub mod stake;
pub mod transfer;

pub use asset::AssetRecord;
pub use contact::Contact;
pub use fiat::{FiatAccount, FiatTransaction, FiatTransactionKind};
pub use payment::{CryptoFunding, Merchant, QrPayment};
pub use portfolio::Portfolio;
pub use profile::UserProfile;
pub use quote::ConversionQuote;
pub use stake::StakePosition;
pub use transfer::TransferRequest;

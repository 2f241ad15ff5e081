//! # UniWallet Core
//!
//! Headless wallet engine for the UniWallet prototype.
//!
//! This crate contains the domain model and screen-session logic behind a
//! consumer digital wallet covering fiat and crypto balances, transfers,
//! QR payments, staking and profile management. It is a *library*: every
//! screen of the UniWallet front-end maps to a flow controller here, driven
//! by discrete user actions. Rendering, layout and routing are out of scope.
//!
//! There is no backend. Repositories are in-memory, "submission" is a
//! simulated delay followed by a synthesized receipt, and platform
//! collaborators (clipboard, share sheet, QR scanner) are traits with mock
//! implementations.
//!
//! # Layers
//!
//! - [`domain`] — value objects, entities and pure derivation services
//! - [`application`] — flow controllers owning per-session wizard state
//! - [`infrastructure`] — in-memory repositories and platform collaborators
//! - [`config`] — layered runtime configuration
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::services::pricing;
//! use uniwallet_core::domain::value_objects::{FiatAmount, Quantity};
//! use rust_decimal::Decimal;
//!
//! let quantity = Quantity::new(Decimal::new(5, 1)).unwrap(); // 0.5
//! let price = FiatAmount::new(Decimal::new(10_323, 0)).unwrap();
//!
//! let fiat = pricing::convert(quantity, price).unwrap();
//! assert_eq!(fiat.rounded(), Decimal::new(516_150, 2)); // RM 5161.50
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

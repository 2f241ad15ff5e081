//! # Demo Fixtures
//!
//! The mock data the prototype ships with: holdings, the addable catalog,
//! merchants, active stakes, deposit addresses and contacts.
//!
//! Everything is assembled leniently: an entry that fails validation is
//! skipped rather than panicking, so the fixtures are safe to build in any
//! context.

use crate::domain::entities::asset::AssetRecord;
use crate::domain::entities::contact::Contact;
use crate::domain::entities::fiat::FiatAccount;
use crate::domain::entities::payment::Merchant;
use crate::domain::entities::portfolio::Portfolio;
use crate::domain::entities::stake::StakePosition;
use crate::domain::value_objects::{
    AssetCategory, AssetSymbol, ContactId, FiatAmount, MerchantId, Quantity, Timestamp,
    WalletAddress,
};
use rust_decimal::Decimal;

struct AssetSeed {
    symbol: &'static str,
    name: &'static str,
    price: Decimal,
    change_percent: Decimal,
    category: AssetCategory,
    reward_percent: Option<Decimal>,
    holdings: Decimal,
}

const HELD: [AssetSeed; 3] = [
    AssetSeed {
        symbol: "BTC",
        name: "Bitcoin",
        price: Decimal::from_parts(453_988, 0, 0, false, 0),
        change_percent: Decimal::from_parts(55, 0, 0, true, 2),
        category: AssetCategory::Layer1,
        reward_percent: None,
        holdings: Decimal::from_parts(234, 0, 0, false, 4),
    },
    AssetSeed {
        symbol: "ETH",
        name: "Ethereum",
        price: Decimal::from_parts(10_323, 0, 0, false, 0),
        change_percent: Decimal::from_parts(22, 0, 0, false, 2),
        category: AssetCategory::Layer1,
        reward_percent: Some(Decimal::from_parts(21, 0, 0, false, 1)),
        holdings: Decimal::from_parts(12_567, 0, 0, false, 4),
    },
    AssetSeed {
        symbol: "ADA",
        name: "Cardano",
        price: Decimal::from_parts(145, 0, 0, false, 2),
        change_percent: Decimal::from_parts(123, 0, 0, false, 2),
        category: AssetCategory::Layer1,
        reward_percent: None,
        holdings: Decimal::from_parts(850, 0, 0, false, 0),
    },
];

const CATALOG: [AssetSeed; 8] = [
    AssetSeed {
        symbol: "SOL",
        name: "Solana",
        price: Decimal::from_parts(42_567, 0, 0, false, 2),
        change_percent: Decimal::from_parts(845, 0, 0, false, 2),
        category: AssetCategory::Layer1,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "LINK",
        name: "Chainlink",
        price: Decimal::from_parts(6_789, 0, 0, false, 2),
        change_percent: Decimal::from_parts(1_234, 0, 0, false, 2),
        category: AssetCategory::DeFi,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "MATIC",
        name: "Polygon",
        price: Decimal::from_parts(345, 0, 0, false, 2),
        change_percent: Decimal::from_parts(215, 0, 0, true, 2),
        category: AssetCategory::Layer1,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "UNI",
        name: "Uniswap",
        price: Decimal::from_parts(2_890, 0, 0, false, 2),
        change_percent: Decimal::from_parts(567, 0, 0, false, 2),
        category: AssetCategory::DeFi,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "AVAX",
        name: "Avalanche",
        price: Decimal::from_parts(15_678, 0, 0, false, 2),
        change_percent: Decimal::from_parts(1_523, 0, 0, false, 2),
        category: AssetCategory::Layer1,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "DOGE",
        name: "Dogecoin",
        price: Decimal::from_parts(34, 0, 0, false, 2),
        change_percent: Decimal::from_parts(2_567, 0, 0, false, 2),
        category: AssetCategory::MemeCoins,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "DOT",
        name: "Polkadot",
        price: Decimal::from_parts(2_345, 0, 0, false, 2),
        change_percent: Decimal::from_parts(123, 0, 0, true, 2),
        category: AssetCategory::Layer1,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
    AssetSeed {
        symbol: "SHIB",
        name: "Shiba Inu",
        price: Decimal::from_parts(89, 0, 0, false, 6),
        change_percent: Decimal::from_parts(4_567, 0, 0, false, 2),
        category: AssetCategory::MemeCoins,
        reward_percent: None,
        holdings: Decimal::ZERO,
    },
];

fn build(seed: &AssetSeed) -> Option<AssetRecord> {
    let symbol = AssetSymbol::new(seed.symbol).ok()?;
    let price = FiatAmount::new(seed.price).ok()?;
    let mut record =
        AssetRecord::new(symbol, seed.name, price, seed.change_percent, seed.category).ok()?;
    if let Some(reward) = seed.reward_percent {
        record = record.with_reward(reward);
    }
    let holdings = Quantity::new(seed.holdings).ok()?;
    Some(record.with_holdings(holdings))
}

/// Returns the three seeded holdings: BTC, ETH and ADA.
#[must_use]
pub fn holdings() -> Vec<AssetRecord> {
    HELD.iter().filter_map(build).collect()
}

/// Returns the addable catalog entries, none of them held.
#[must_use]
pub fn catalog() -> Vec<AssetRecord> {
    CATALOG.iter().filter_map(build).collect()
}

/// Returns the seeded portfolio built from [`holdings`].
#[must_use]
pub fn portfolio() -> Portfolio {
    Portfolio::from_assets(holdings()).unwrap_or_default()
}

/// Returns the demo merchant directory.
#[must_use]
pub fn merchants() -> Vec<Merchant> {
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
        Merchant::new(
            MerchantId::new("MCDONALDS_MY"),
            "McDonald's",
            "60111222333",
            "Fast Food",
            "Mid Valley Megamall",
        ),
    ]
}

/// Returns the two seeded active stakes, relative to `now`.
///
/// An ETH stake 15 days into a 30-day lock and an ADA stake 18 days into a
/// 60-day lock.
#[must_use]
pub fn active_stakes(now: Timestamp) -> Vec<StakePosition> {
    let mut stakes = Vec::new();
    if let (Ok(symbol), Ok(principal)) = (
        AssetSymbol::new("ETH"),
        Quantity::new(Decimal::from_parts(5, 0, 0, false, 1)),
    ) {
        if let Ok(stake) = StakePosition::open(
            symbol,
            principal,
            Decimal::from_parts(45, 0, 0, false, 1),
            30,
            now.add_days(-15),
        ) {
            stakes.push(stake);
        }
    }
    if let (Ok(symbol), Ok(principal)) = (
        AssetSymbol::new("ADA"),
        Quantity::new(Decimal::from_parts(500, 0, 0, false, 0)),
    ) {
        if let Ok(stake) = StakePosition::open(
            symbol,
            principal,
            Decimal::from_parts(52, 0, 0, false, 1),
            60,
            now.add_days(-18),
        ) {
            stakes.push(stake);
        }
    }
    stakes
}

/// Returns the per-network deposit address book.
#[must_use]
pub fn deposit_addresses() -> Vec<(AssetSymbol, WalletAddress)> {
    [
        ("BTC", "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
        ("ETH", "0x742d35Cc6634C0532925a3b8D4C2C4e4C8C8C8C8"),
        ("ADA", "addr1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
        ("SOL", "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU"),
        ("DOGE", "DH5yaieqoZN36fDVciNyRueRGvGLR3mr7L"),
        ("DOT", "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"),
    ]
    .into_iter()
    .filter_map(|(symbol, address)| {
        Some((
            AssetSymbol::new(symbol).ok()?,
            WalletAddress::parse(address).ok()?,
        ))
    })
    .collect()
}

/// Returns the seeded recent contacts.
#[must_use]
pub fn contacts(now: Timestamp) -> Vec<Contact> {
    [
        (
            "c-1",
            "John Doe",
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            2,
        ),
        (
            "c-2",
            "Sarah Wilson",
            "0x742d35Cc6634C0532925a3b8D4C2C4e4C8C8C8C8",
            7,
        ),
        (
            "c-3",
            "Mike Chen",
            "addr1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            14,
        ),
    ]
    .into_iter()
    .filter_map(|(id, name, address, days_ago)| {
        Some(Contact::new(
            ContactId::new(id),
            name,
            WalletAddress::parse(address).ok()?,
            now.add_days(-days_ago),
        ))
    })
    .collect()
}

/// Returns the seeded fiat account with its RM 12,847.50 balance.
#[must_use]
pub fn fiat_account() -> FiatAccount {
    FiatAmount::new(Decimal::from_parts(1_284_750, 0, 0, false, 2))
        .map(FiatAccount::with_balance)
        .unwrap_or_default()
}

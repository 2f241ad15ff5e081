//! End-to-end journeys across the wallet flows, wired the way the
//! application shell would wire them: demo repositories feeding screen
//! controllers, with simulated latencies driven by paused tokio time.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use uniwallet_core::application::services::{
    CatalogBrowser, FiatFlow, FiatFlowKind, PayFlow, QrScanSession, ReceiveFlow, Retreat,
    SendFlow, StakeFlow,
};
use uniwallet_core::config::WalletConfig;
use uniwallet_core::domain::entities::fiat::FiatTransactionKind;
use uniwallet_core::domain::value_objects::{
    AssetSymbol, FiatAmount, Quantity, ScanPhase, SubmitStep, Timestamp, TransferStep,
};
use uniwallet_core::infrastructure::demo;
use uniwallet_core::infrastructure::persistence::in_memory::{
    InMemoryAssetCatalog, InMemoryMerchantDirectory, InMemoryStakeStore,
};
use uniwallet_core::infrastructure::persistence::{
    AssetCatalog, MerchantDirectory, StakeStore,
};
use uniwallet_core::infrastructure::platform::{MemoryClipboard, NoopShareSheet};
use uniwallet_core::infrastructure::scanner::MockQrScanner;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("uniwallet_core=debug")
        .try_init();
}

#[tokio::test(start_paused = true)]
async fn send_journey_from_form_to_receipt() {
    init_tracing();
    let config = WalletConfig::default();
    let mut flow = SendFlow::new(
        demo::holdings(),
        config.fees.clone(),
        config.latency.submit_delay(),
    );

    // Fill the form from a recent contact.
    let contact = demo::contacts(Timestamp::now()).remove(0);
    flow.set_recipient(contact.address.as_str());
    flow.set_amount("0.01");
    flow.set_note("weekly settlement");
    assert!(flow.can_advance());

    flow.advance();
    assert_eq!(flow.step(), TransferStep::Confirm);

    let receipt = flow.submit().await.unwrap();
    assert_eq!(flow.step(), TransferStep::Completed);
    assert_eq!(receipt.asset.as_str(), "BTC");
    assert_eq!(receipt.total, Quantity::parse("0.0103").unwrap());
    assert!(receipt.short_recipient().contains("..."));
}

#[tokio::test(start_paused = true)]
async fn crypto_pay_journey_through_qr_scan() {
    init_tracing();
    let config = WalletConfig::default();

    // Select ETH, convert RM 100 worth, hand off to the scanner.
    let mut pay = PayFlow::new(demo::holdings());
    pay.select_asset(&AssetSymbol::new("ETH").unwrap()).unwrap();
    pay.advance();
    pay.set_fiat_amount("100").unwrap();
    assert!(pay.can_advance());
    pay.advance();
    let handoff = pay.handoff().unwrap();

    let directory = InMemoryMerchantDirectory::seeded();
    let scanner = Arc::new(MockQrScanner::new(
        directory.all().await.unwrap(),
        config.latency.scan_delay(),
    ));
    let mut session = QrScanSession::with_funding(
        scanner,
        config.latency.submit_delay(),
        handoff.funding,
        handoff.fiat,
    );

    session.scan().await.unwrap();
    assert!(session.amount_locked());

    let payment = session.pay().await.unwrap();
    assert_eq!(session.phase(), ScanPhase::Completed);
    assert_eq!(payment.total(), FiatAmount::parse("100").unwrap());
    assert_eq!(payment.funding().unwrap().asset.as_str(), "ETH");
}

#[tokio::test(start_paused = true)]
async fn staking_journey_persists_the_new_position() {
    init_tracing();
    let config = WalletConfig::default();
    let store = InMemoryStakeStore::seeded(Timestamp::now());

    let holdings = demo::holdings()
        .into_iter()
        .map(|asset| (asset.symbol().clone(), asset.holdings()))
        .collect();
    let mut flow = StakeFlow::new(
        config.staking.options.clone(),
        config.staking.periods.clone(),
        holdings,
        store.active().await.unwrap(),
        config.latency.submit_delay(),
    );

    assert_eq!(flow.active_stakes().len(), 2);
    flow.select_period(90).unwrap();
    flow.set_amount("0.5");
    let projected = flow.projected_reward().unwrap();
    assert!(projected.is_positive());

    let position = flow.submit().await.unwrap();
    assert_eq!(flow.step(), SubmitStep::Completed);
    store.save(&position).await.unwrap();
    assert_eq!(store.active().await.unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn fiat_topup_and_transfer_share_one_account() {
    init_tracing();
    let config = WalletConfig::default();

    let mut topup = FiatFlow::new(
        demo::fiat_account(),
        FiatFlowKind::TopUp,
        config.latency.submit_delay(),
    );
    topup.set_amount("500");
    let entry = topup.submit().await.unwrap();
    assert_eq!(entry.kind, FiatTransactionKind::TopUp);

    let mut transfer = FiatFlow::new(
        topup.into_account(),
        FiatFlowKind::Transfer,
        config.latency.submit_delay(),
    );
    transfer.set_amount("150");
    transfer.set_recipient("Mike Chen");
    transfer.submit().await.unwrap();

    let account = transfer.into_account();
    // 12847.50 + 500 - 150
    assert_eq!(account.balance(), FiatAmount::parse("13197.50").unwrap());
    assert_eq!(account.transactions().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn receive_copy_flag_expires_on_schedule() {
    init_tracing();
    let clipboard = Arc::new(MemoryClipboard::new());
    let mut flow = ReceiveFlow::new(
        demo::deposit_addresses(),
        clipboard.clone(),
        Arc::new(NoopShareSheet),
    )
    .unwrap();

    flow.select_asset(&AssetSymbol::new("ETH").unwrap()).unwrap();
    let copied_at = Timestamp::now();
    flow.copy_address(copied_at).unwrap();

    assert_eq!(clipboard.len(), 1);
    assert!(flow.copied_visible(copied_at.add_secs(1)));
    assert!(!flow.copied_visible(copied_at.add_secs(2)));
    assert!(!flow.share_address());
}

#[tokio::test(start_paused = true)]
async fn catalog_add_then_send_sees_the_new_asset() {
    init_tracing();
    let catalog = InMemoryAssetCatalog::seeded();
    let browser = CatalogBrowser::new(catalog.all().await.unwrap());
    let mut portfolio = demo::portfolio();

    let sol = AssetSymbol::new("SOL").unwrap();
    browser.add_to_portfolio(&sol, &mut portfolio).unwrap();
    assert_eq!(portfolio.len(), 4);

    // The freshly added asset has no balance, so the send flow skips it.
    let config = WalletConfig::default();
    let flow = SendFlow::new(
        portfolio.assets().to_vec(),
        config.fees.clone(),
        config.latency.submit_delay(),
    );
    assert!(flow
        .spendable_assets()
        .iter()
        .all(|asset| asset.symbol() != &sol));
}

#[tokio::test(start_paused = true)]
async fn retreat_at_the_first_step_exits_every_flow() {
    init_tracing();
    let config = WalletConfig::default();

    let mut send = SendFlow::new(
        demo::holdings(),
        config.fees.clone(),
        config.latency.submit_delay(),
    );
    assert_eq!(send.retreat(), Retreat::Exit);

    let mut pay = PayFlow::new(demo::holdings());
    assert_eq!(pay.retreat(), Retreat::Exit);

    let holdings = demo::holdings()
        .into_iter()
        .map(|asset| (asset.symbol().clone(), asset.holdings()))
        .collect();
    let mut stake = StakeFlow::new(
        config.staking.options.clone(),
        config.staking.periods.clone(),
        holdings,
        vec![],
        config.latency.submit_delay(),
    );
    assert_eq!(stake.retreat(), Retreat::Exit);
}

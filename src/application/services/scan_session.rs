//! # QR Scan Session
//!
//! Controller for the scan-and-pay screen.
//!
//! Drives `Scanning → Detected → Paying → Completed`. Detection is the mock
//! scanner resolving a merchant after its simulated delay; payment runs the
//! submission delay and synthesizes a receipt. When the session was entered
//! from the crypto-pay wizard, the amount field arrives pre-filled from the
//! conversion and is locked.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::payment::{CryptoFunding, Merchant, QrPayment};
use crate::domain::value_objects::{FiatAmount, ScanPhase, Timestamp};
use crate::infrastructure::scanner::QrScanner;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

/// Quick amounts offered when the payment is not funded from crypto (RM).
const QUICK_AMOUNTS: [Decimal; 4] = [
    Decimal::from_parts(10, 0, 0, false, 0),
    Decimal::from_parts(20, 0, 0, false, 0),
    Decimal::from_parts(50, 0, 0, false, 0),
    Decimal::from_parts(100, 0, 0, false, 0),
];

/// Screen controller for a QR scan-and-pay session.
pub struct QrScanSession {
    scanner: Arc<dyn QrScanner>,
    submit_delay: Duration,
    phase: ScanPhase,
    merchant: Option<Merchant>,
    amount_input: String,
    amount_locked: bool,
    note: String,
    funding: Option<CryptoFunding>,
    receipt: Option<QrPayment>,
}

impl QrScanSession {
    /// Creates a session for a direct fiat payment.
    #[must_use]
    pub fn new(scanner: Arc<dyn QrScanner>, submit_delay: Duration) -> Self {
        Self {
            scanner,
            submit_delay,
            phase: ScanPhase::Scanning,
            merchant: None,
            amount_input: String::new(),
            amount_locked: false,
            note: String::new(),
            funding: None,
            receipt: None,
        }
    }

    /// Creates a session funded by a crypto conversion.
    ///
    /// The amount arrives pre-filled at fiat display precision and is
    /// locked against edits.
    #[must_use]
    pub fn with_funding(
        scanner: Arc<dyn QrScanner>,
        submit_delay: Duration,
        funding: CryptoFunding,
        fiat: FiatAmount,
    ) -> Self {
        let mut session = Self::new(scanner, submit_delay);
        session.amount_input = format!("{:.2}", fiat.rounded());
        session.amount_locked = true;
        session.funding = Some(funding);
        session
    }

    /// Returns the current phase.
    #[inline]
    #[must_use]
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Returns the detected merchant, once past scanning.
    #[inline]
    #[must_use]
    pub fn merchant(&self) -> Option<&Merchant> {
        self.merchant.as_ref()
    }

    /// Returns true if the amount field is locked by a crypto conversion.
    #[inline]
    #[must_use]
    pub fn amount_locked(&self) -> bool {
        self.amount_locked
    }

    /// Returns the quick amounts offered for direct payments.
    #[must_use]
    pub fn quick_amounts() -> [FiatAmount; 4] {
        QUICK_AMOUNTS.map(|d| FiatAmount::new(d).unwrap_or(FiatAmount::ZERO))
    }

    /// Waits for the scanner to detect a merchant.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` outside the scanning phase
    /// or a scanner error if nothing can be detected.
    pub async fn scan(&mut self) -> ApplicationResult<&Merchant> {
        if self.phase != ScanPhase::Scanning {
            return Err(ApplicationError::invalid_state(format!(
                "cannot scan in phase {}",
                self.phase
            )));
        }
        let merchant = self.scanner.scan().await?;
        tracing::info!(merchant = %merchant.name, "merchant detected");
        self.merchant = Some(merchant);
        self.phase = ScanPhase::Detected;
        self.merchant
            .as_ref()
            .ok_or_else(|| ApplicationError::invalid_state("merchant vanished"))
    }

    /// Discards the detection and returns to scanning.
    ///
    /// Clears the note, and the amount too unless it is conversion-locked.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` outside the detected phase.
    pub fn rescan(&mut self) -> ApplicationResult<()> {
        if self.phase != ScanPhase::Detected {
            return Err(ApplicationError::invalid_state(format!(
                "cannot rescan in phase {}",
                self.phase
            )));
        }
        self.phase = ScanPhase::Scanning;
        self.merchant = None;
        self.note.clear();
        if !self.amount_locked {
            self.amount_input.clear();
        }
        Ok(())
    }

    /// Stores the amount input.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` when the amount is locked by
    /// a crypto conversion.
    pub fn set_amount(&mut self, input: impl Into<String>) -> ApplicationResult<()> {
        if self.amount_locked {
            return Err(ApplicationError::invalid_state(
                "amount is fixed by the crypto conversion",
            ));
        }
        self.amount_input = input.into();
        Ok(())
    }

    /// Stores the optional note.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Returns the parsed amount, if the input is a positive number.
    #[must_use]
    pub fn parsed_amount(&self) -> Option<FiatAmount> {
        FiatAmount::parse(&self.amount_input)
            .ok()
            .filter(FiatAmount::is_positive)
    }

    /// Returns true if a detected payment is ready to submit.
    #[must_use]
    pub fn can_pay(&self) -> bool {
        self.phase == ScanPhase::Detected && self.parsed_amount().is_some()
    }

    /// Submits the payment to the detected merchant.
    ///
    /// Runs the simulated submission delay, then synthesizes the receipt and
    /// enters the terminal phase. No other transition can happen while the
    /// delay is pending.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::SubmissionPending` while paying,
    /// `ApplicationError::InvalidState` outside the detected phase, or a
    /// validation error for a missing amount.
    pub async fn pay(&mut self) -> ApplicationResult<QrPayment> {
        match self.phase {
            ScanPhase::Detected => {}
            ScanPhase::Paying => return Err(ApplicationError::SubmissionPending),
            other => {
                return Err(ApplicationError::invalid_state(format!(
                    "cannot pay in phase {other}"
                )));
            }
        }
        let amount = self
            .parsed_amount()
            .ok_or_else(|| ApplicationError::validation("payment amount missing"))?;
        let merchant = self
            .merchant
            .clone()
            .ok_or_else(|| ApplicationError::invalid_state("no merchant detected"))?;

        self.phase = ScanPhase::Paying;
        tracing::info!(merchant = %merchant.name, amount = %amount, "submitting payment");
        tokio::time::sleep(self.submit_delay).await;

        let note = if self.note.trim().is_empty() {
            None
        } else {
            Some(self.note.clone())
        };
        let payment = QrPayment::new(
            merchant,
            amount,
            note,
            self.funding.clone(),
            Timestamp::now(),
        )?;
        self.phase = ScanPhase::Completed;
        self.receipt = Some(payment.clone());
        tracing::info!(reference = %payment.reference(), "payment completed");
        Ok(payment)
    }

    /// Returns the receipt once the payment completed.
    #[inline]
    #[must_use]
    pub fn receipt(&self) -> Option<&QrPayment> {
        self.receipt.as_ref()
    }

    /// Returns to the scanning phase and clears everything entered.
    ///
    /// The conversion lock survives: a funded session resets back to its
    /// pre-filled amount.
    pub fn reset(&mut self) {
        self.phase = ScanPhase::Scanning;
        self.merchant = None;
        self.note.clear();
        self.receipt = None;
        if !self.amount_locked {
            self.amount_input.clear();
        }
    }
}

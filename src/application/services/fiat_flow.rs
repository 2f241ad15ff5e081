//! # Fiat Flow
//!
//! Controller for fiat top-up and fiat transfer.
//!
//! A single-form wizard over the [`FiatAccount`]: enter an amount (and a
//! recipient for transfers), submit through the simulated delay, and read
//! the receipt off the ledger entry.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::Retreat;
use crate::domain::entities::fiat::{FiatAccount, FiatTransaction};
use crate::domain::value_objects::{FiatAmount, SubmitStep, Timestamp, TopUpMethod};
use std::time::Duration;

/// Which fiat operation this session performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiatFlowKind {
    /// Credit the balance from a funding method.
    TopUp,
    /// Send balance to another person.
    Transfer,
}

/// Screen controller for a fiat top-up or transfer session.
#[derive(Debug)]
pub struct FiatFlow {
    account: FiatAccount,
    kind: FiatFlowKind,
    submit_delay: Duration,
    step: SubmitStep,
    method: TopUpMethod,
    amount_input: String,
    recipient_input: String,
    note: String,
    receipt: Option<FiatTransaction>,
}

impl FiatFlow {
    /// Creates a fiat flow session over the given account.
    #[must_use]
    pub fn new(account: FiatAccount, kind: FiatFlowKind, submit_delay: Duration) -> Self {
        Self {
            account,
            kind,
            submit_delay,
            step: SubmitStep::Form,
            method: TopUpMethod::default(),
            amount_input: String::new(),
            recipient_input: String::new(),
            note: String::new(),
            receipt: None,
        }
    }

    /// Returns the current step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> SubmitStep {
        self.step
    }

    /// Returns the operation kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FiatFlowKind {
        self.kind
    }

    /// Returns the account as it currently stands.
    #[inline]
    #[must_use]
    pub fn account(&self) -> &FiatAccount {
        &self.account
    }

    /// Consumes the flow, returning the account with any applied movement.
    #[must_use]
    pub fn into_account(self) -> FiatAccount {
        self.account
    }

    /// Selects the top-up funding method.
    pub fn set_method(&mut self, method: TopUpMethod) {
        self.method = method;
    }

    /// Stores the amount input.
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount_input = input.into();
    }

    /// Stores the transfer recipient.
    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.recipient_input = recipient.into();
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

    /// Returns true if the form validates and `submit()` will run.
    ///
    /// Transfers additionally require a recipient and a balance that covers
    /// the amount.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        if self.step != SubmitStep::Form {
            return false;
        }
        let Some(amount) = self.parsed_amount() else {
            return false;
        };
        match self.kind {
            FiatFlowKind::TopUp => true,
            FiatFlowKind::Transfer => {
                !self.recipient_input.trim().is_empty() && amount <= self.account.balance()
            }
        }
    }

    /// Moves to the previous step, or signals an exit at the first step.
    pub fn retreat(&mut self) -> Retreat {
        match self.step {
            SubmitStep::Form => Retreat::Exit,
            SubmitStep::Submitting => Retreat::Blocked,
            SubmitStep::Completed => Retreat::Exit,
        }
    }

    /// Returns to the form and clears every entered value.
    pub fn reset(&mut self) {
        self.step = SubmitStep::Form;
        self.method = TopUpMethod::default();
        self.amount_input.clear();
        self.recipient_input.clear();
        self.note.clear();
        self.receipt = None;
    }

    /// Returns the ledger entry once the operation completed.
    #[inline]
    #[must_use]
    pub fn receipt(&self) -> Option<&FiatTransaction> {
        self.receipt.as_ref()
    }

    /// Applies the operation to the account.
    ///
    /// Runs the simulated submission delay, then credits or debits the
    /// balance and records the ledger entry.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::SubmissionPending` while in flight,
    /// `ApplicationError::InvalidState` from the terminal step, or a
    /// validation error if the form does not validate.
    pub async fn submit(&mut self) -> ApplicationResult<FiatTransaction> {
        match self.step {
            SubmitStep::Form => {}
            SubmitStep::Submitting => return Err(ApplicationError::SubmissionPending),
            SubmitStep::Completed => {
                return Err(ApplicationError::invalid_state("already completed"));
            }
        }
        if !self.can_submit() {
            return Err(ApplicationError::validation(
                "fiat form is incomplete or over balance",
            ));
        }
        let amount = self
            .parsed_amount()
            .ok_or_else(|| ApplicationError::validation("amount missing"))?;

        self.step = SubmitStep::Submitting;
        tracing::info!(kind = ?self.kind, amount = %amount, "submitting fiat operation");
        tokio::time::sleep(self.submit_delay).await;

        let note = if self.note.trim().is_empty() {
            None
        } else {
            Some(self.note.clone())
        };
        let now = Timestamp::now();
        let entry = match self.kind {
            FiatFlowKind::TopUp => self.account.top_up(amount, self.method, now)?,
            FiatFlowKind::Transfer => {
                let recipient = self.recipient_input.trim().to_string();
                self.account.transfer_out(amount, recipient, note, now)?
            }
        }
        .clone();

        self.step = SubmitStep::Completed;
        self.receipt = Some(entry.clone());
        tracing::info!(reference = %entry.reference(), "fiat operation completed");
        Ok(entry)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::fiat::FiatTransactionKind;
    use crate::infrastructure::demo;

    fn topup_flow() -> FiatFlow {
        FiatFlow::new(
            demo::fiat_account(),
            FiatFlowKind::TopUp,
            Duration::from_millis(10),
        )
    }

    fn transfer_flow() -> FiatFlow {
        FiatFlow::new(
            demo::fiat_account(),
            FiatFlowKind::Transfer,
            Duration::from_millis(10),
        )
    }

    #[test]
    fn topup_needs_only_an_amount() {
        let mut flow = topup_flow();
        assert!(!flow.can_submit());
        flow.set_amount("100");
        assert!(flow.can_submit());
    }

    #[test]
    fn transfer_needs_recipient_and_balance() {
        let mut flow = transfer_flow();
        flow.set_amount("150");
        assert!(!flow.can_submit());
        flow.set_recipient("John Doe");
        assert!(flow.can_submit());
        flow.set_amount("999999");
        assert!(!flow.can_submit());
    }

    #[test]
    fn non_numeric_amount_never_submits() {
        let mut flow = topup_flow();
        flow.set_amount("abc");
        assert!(!flow.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn topup_credits_balance_with_top_reference() {
        let mut flow = topup_flow();
        flow.set_amount("100");
        flow.set_method(TopUpMethod::BankTransfer);

        let entry = flow.submit().await.unwrap();
        assert_eq!(entry.kind, FiatTransactionKind::TopUp);
        assert!(entry.reference().starts_with("TOP-"));
        assert_eq!(
            flow.account().balance(),
            FiatAmount::parse("12947.50").unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn transfer_debits_balance() {
        let mut flow = transfer_flow();
        flow.set_amount("150");
        flow.set_recipient("Sarah Wilson");
        flow.set_note("dinner");

        let entry = flow.submit().await.unwrap();
        assert_eq!(entry.kind, FiatTransactionKind::TransferOut);
        assert_eq!(entry.note.as_deref(), Some("dinner"));
        assert_eq!(
            flow.account().balance(),
            FiatAmount::parse("12697.50").unwrap()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_form_is_rejected_at_submit() {
        let mut flow = transfer_flow();
        flow.set_amount("50");
        let result = flow.submit().await;
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert_eq!(flow.step(), SubmitStep::Form);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_session_hands_back_the_account() {
        let mut flow = topup_flow();
        flow.set_amount("25.50");
        flow.submit().await.unwrap();
        let account = flow.into_account();
        assert_eq!(account.transactions().len(), 1);
    }
}

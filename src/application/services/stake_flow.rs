//! # Stake Flow
//!
//! Controller for the staking screen.
//!
//! Offers the stakeable options and lock periods, gates the amount on
//! minimum stake and balance, projects the reward live, and opens a
//! [`StakePosition`] after the simulated submission delay. Active positions
//! are surfaced alongside with their countdown and progress.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::Retreat;
use crate::domain::entities::stake::{StakePosition, StakingOption, StakingPeriod};
use crate::domain::value_objects::{AssetSymbol, Quantity, SubmitStep, Timestamp};
use std::collections::HashMap;
use std::time::Duration;

/// Screen controller for staking.
#[derive(Debug)]
pub struct StakeFlow {
    options: Vec<StakingOption>,
    periods: Vec<StakingPeriod>,
    holdings: HashMap<AssetSymbol, Quantity>,
    active: Vec<StakePosition>,
    submit_delay: Duration,
    step: SubmitStep,
    selected: Option<AssetSymbol>,
    selected_period: Option<StakingPeriod>,
    amount_input: String,
    receipt: Option<StakePosition>,
}

impl StakeFlow {
    /// Creates a stake flow.
    ///
    /// `holdings` maps each symbol to the user's available balance. The
    /// first available option and the first period are pre-selected.
    #[must_use]
    pub fn new(
        options: Vec<StakingOption>,
        periods: Vec<StakingPeriod>,
        holdings: HashMap<AssetSymbol, Quantity>,
        active: Vec<StakePosition>,
        submit_delay: Duration,
    ) -> Self {
        let selected = options
            .iter()
            .find(|o| o.available)
            .map(|o| o.symbol.clone());
        let selected_period = periods.first().copied();
        Self {
            options,
            periods,
            holdings,
            active,
            submit_delay,
            step: SubmitStep::Form,
            selected,
            selected_period,
            amount_input: String::new(),
            receipt: None,
        }
    }

    /// Returns the current step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> SubmitStep {
        self.step
    }

    /// Returns the offered staking options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[StakingOption] {
        &self.options
    }

    /// Returns the offered lock periods.
    #[inline]
    #[must_use]
    pub fn periods(&self) -> &[StakingPeriod] {
        &self.periods
    }

    /// Returns the active positions, newest last.
    #[inline]
    #[must_use]
    pub fn active_stakes(&self) -> &[StakePosition] {
        &self.active
    }

    /// Returns the selected option.
    #[must_use]
    pub fn selected_option(&self) -> Option<&StakingOption> {
        let symbol = self.selected.as_ref()?;
        self.options.iter().find(|o| &o.symbol == symbol)
    }

    /// Returns the selected lock period.
    #[inline]
    #[must_use]
    pub fn selected_period(&self) -> Option<StakingPeriod> {
        self.selected_period
    }

    /// Returns the available balance for the selected option.
    #[must_use]
    pub fn available(&self) -> Quantity {
        self.selected
            .as_ref()
            .and_then(|symbol| self.holdings.get(symbol))
            .copied()
            .unwrap_or(Quantity::ZERO)
    }

    /// Selects a stakeable asset.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown symbol or
    /// `ApplicationError::Validation` for an unavailable option.
    pub fn select_option(&mut self, symbol: &AssetSymbol) -> ApplicationResult<()> {
        let option = self
            .options
            .iter()
            .find(|o| &o.symbol == symbol)
            .ok_or_else(|| ApplicationError::not_found("staking option", symbol.as_str()))?;
        if !option.available {
            return Err(ApplicationError::validation(format!(
                "staking {symbol} is not available"
            )));
        }
        self.selected = Some(symbol.clone());
        Ok(())
    }

    /// Selects a lock period by its day count.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no such period is offered.
    pub fn select_period(&mut self, days: u32) -> ApplicationResult<()> {
        let period = self
            .periods
            .iter()
            .find(|p| p.days == days)
            .copied()
            .ok_or_else(|| ApplicationError::not_found("staking period", days.to_string()))?;
        self.selected_period = Some(period);
        Ok(())
    }

    /// Stores the amount input.
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount_input = input.into();
    }

    /// Returns the parsed amount, if the input is a positive number.
    #[must_use]
    pub fn parsed_amount(&self) -> Option<Quantity> {
        Quantity::parse(&self.amount_input)
            .ok()
            .filter(Quantity::is_positive)
    }

    /// Projects the reward for the entered amount over the selected period.
    ///
    /// Recomputed on every relevant input change; `None` while the form is
    /// incomplete.
    #[must_use]
    pub fn projected_reward(&self) -> Option<Quantity> {
        let amount = self.parsed_amount()?;
        let period = self.selected_period?;
        crate::domain::services::pricing::staking_reward(amount, period.apy_percent, period.days)
            .ok()
    }

    /// Returns true if the form validates and `submit()` will run.
    ///
    /// The amount must be at least the option's minimum stake and at most
    /// the available balance.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        if self.step != SubmitStep::Form || self.selected_period.is_none() {
            return false;
        }
        let (Some(amount), Some(option)) = (self.parsed_amount(), self.selected_option()) else {
            return false;
        };
        option.available && amount >= option.min_stake && amount <= self.available()
    }

    /// Moves to the previous step, or signals an exit at the first step.
    pub fn retreat(&mut self) -> Retreat {
        match self.step {
            SubmitStep::Form => Retreat::Exit,
            SubmitStep::Submitting => Retreat::Blocked,
            SubmitStep::Completed => Retreat::Exit,
        }
    }

    /// Returns to the form and clears the entered amount.
    pub fn reset(&mut self) {
        self.step = SubmitStep::Form;
        self.amount_input.clear();
        self.receipt = None;
        self.selected = self
            .options
            .iter()
            .find(|o| o.available)
            .map(|o| o.symbol.clone());
        self.selected_period = self.periods.first().copied();
    }

    /// Returns the opened position once staking completed.
    #[inline]
    #[must_use]
    pub fn receipt(&self) -> Option<&StakePosition> {
        self.receipt.as_ref()
    }

    /// Opens the stake position.
    ///
    /// Runs the simulated submission delay, then appends the position to the
    /// active list and enters the terminal step.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::SubmissionPending` while a submission is
    /// in flight, `ApplicationError::InvalidState` from the terminal step,
    /// or a validation error if the form does not validate.
    pub async fn submit(&mut self) -> ApplicationResult<StakePosition> {
        match self.step {
            SubmitStep::Form => {}
            SubmitStep::Submitting => return Err(ApplicationError::SubmissionPending),
            SubmitStep::Completed => {
                return Err(ApplicationError::invalid_state("staking already completed"));
            }
        }
        if !self.can_submit() {
            return Err(ApplicationError::validation(
                "staking form is incomplete or out of range",
            ));
        }
        let amount = self
            .parsed_amount()
            .ok_or_else(|| ApplicationError::validation("stake amount missing"))?;
        let symbol = self
            .selected
            .clone()
            .ok_or_else(|| ApplicationError::validation("no option selected"))?;
        let period = self
            .selected_period
            .ok_or_else(|| ApplicationError::validation("no period selected"))?;

        self.step = SubmitStep::Submitting;
        tracing::info!(asset = %symbol, amount = %amount, days = period.days, "opening stake");
        tokio::time::sleep(self.submit_delay).await;

        let position = StakePosition::open(
            symbol,
            amount,
            period.apy_percent,
            period.days,
            Timestamp::now(),
        )?;
        self.active.push(position.clone());
        self.receipt = Some(position.clone());
        self.step = SubmitStep::Completed;
        tracing::info!(id = %position.id(), unlock = %position.unlock_at().date_string(), "stake opened");
        Ok(position)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sym(s: &str) -> AssetSymbol {
        AssetSymbol::new(s).unwrap()
    }

    fn options() -> Vec<StakingOption> {
        vec![
            StakingOption {
                symbol: sym("ETH"),
                name: "Ethereum".to_string(),
                headline_apy_percent: Decimal::new(45, 1),
                min_stake: Quantity::parse("0.1").unwrap(),
                available: true,
            },
            StakingOption {
                symbol: sym("ADA"),
                name: "Cardano".to_string(),
                headline_apy_percent: Decimal::new(52, 1),
                min_stake: Quantity::parse("10").unwrap(),
                available: true,
            },
            StakingOption {
                symbol: sym("DOT"),
                name: "Polkadot".to_string(),
                headline_apy_percent: Decimal::new(125, 1),
                min_stake: Quantity::parse("1").unwrap(),
                available: false,
            },
        ]
    }

    fn periods() -> Vec<StakingPeriod> {
        vec![
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
        ]
    }

    fn holdings() -> HashMap<AssetSymbol, Quantity> {
        HashMap::from([
            (sym("ETH"), Quantity::parse("1.2567").unwrap()),
            (sym("ADA"), Quantity::parse("850").unwrap()),
        ])
    }

    fn flow() -> StakeFlow {
        StakeFlow::new(
            options(),
            periods(),
            holdings(),
            vec![],
            Duration::from_millis(10),
        )
    }

    #[test]
    fn first_available_option_and_period_preselected() {
        let flow = flow();
        assert_eq!(flow.selected_option().unwrap().symbol.as_str(), "ETH");
        assert_eq!(flow.selected_period().unwrap().days, 30);
    }

    #[test]
    fn unavailable_option_cannot_be_selected() {
        let mut flow = flow();
        assert!(flow.select_option(&sym("DOT")).is_err());
    }

    #[test]
    fn unknown_period_is_rejected() {
        let mut flow = flow();
        assert!(flow.select_period(45).is_err());
        flow.select_period(90).unwrap();
        assert_eq!(flow.selected_period().unwrap().days, 90);
    }

    #[test]
    fn below_min_stake_blocks_submission() {
        let mut flow = flow();
        flow.set_amount("0.05"); // ETH minimum is 0.1
        assert!(!flow.can_submit());
        flow.set_amount("0.1");
        assert!(flow.can_submit());
    }

    #[test]
    fn over_balance_blocks_submission() {
        let mut flow = flow();
        flow.set_amount("2.0"); // holds 1.2567 ETH
        assert!(!flow.can_submit());
    }

    #[test]
    fn non_numeric_amount_blocks_submission() {
        let mut flow = flow();
        flow.set_amount("abc");
        assert!(!flow.can_submit());
        assert!(flow.projected_reward().is_none());
    }

    #[test]
    fn projection_follows_period_apy() {
        let mut flow = flow();
        flow.select_option(&sym("ADA")).unwrap();
        flow.select_period(60).unwrap();
        flow.set_amount("500");
        // 500 * 5.2% * 60/365
        let reward = flow.projected_reward().unwrap();
        assert_eq!(
            crate::domain::value_objects::round_fiat(reward.value()),
            Decimal::new(427, 2)
        );
    }

    #[test]
    fn retreat_at_form_exits() {
        let mut flow = flow();
        assert_eq!(flow.retreat(), Retreat::Exit);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_opens_position_and_appends_to_active() {
        let mut flow = flow();
        flow.set_amount("0.5");
        flow.select_period(30).unwrap();

        let position = flow.submit().await.unwrap();
        assert_eq!(flow.step(), SubmitStep::Completed);
        assert_eq!(position.principal(), Quantity::parse("0.5").unwrap());
        assert_eq!(position.period_days(), 30);
        assert_eq!(flow.active_stakes().len(), 1);
        assert_eq!(flow.receipt().unwrap().id(), position.id());
    }

    #[tokio::test(start_paused = true)]
    async fn incomplete_form_cannot_submit() {
        let mut flow = flow();
        let result = flow.submit().await;
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
        assert_eq!(flow.step(), SubmitStep::Form);
    }

    #[tokio::test(start_paused = true)]
    async fn completed_flow_rejects_resubmission_until_reset() {
        let mut flow = flow();
        flow.set_amount("0.5");
        flow.submit().await.unwrap();

        assert!(matches!(
            flow.submit().await,
            Err(ApplicationError::InvalidState(_))
        ));
        flow.reset();
        assert_eq!(flow.step(), SubmitStep::Form);
        assert!(flow.parsed_amount().is_none());
    }
}

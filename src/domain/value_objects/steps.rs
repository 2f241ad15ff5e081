//! # Wizard Step State Machines
//!
//! Linear flow states for the wallet's transaction wizards.
//!
//! Every multi-step screen follows the same discipline: a short ordered list
//! of steps, strictly forward/backward transitions, never skipping, with a
//! terminal success state that admits nothing but a reset. Submission is a
//! distinct pending state that admits only completion, so no other
//! transition can occur while the simulated delay is in flight.
//!
//! # State Machines
//!
//! ```text
//! TransferStep:  Form ⇄ Confirm → Submitting → Completed
//! PayStep:       SelectAsset ⇄ Convert ⇄ Pay
//! ScanPhase:     Scanning → Detected → Paying → Completed
//!                    ↑         │
//!                    └─────────┘ (rescan)
//! SubmitStep:    Form → Submitting → Completed
//! ```
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::TransferStep;
//!
//! let step = TransferStep::Form;
//! assert!(step.can_transition_to(TransferStep::Confirm));
//! assert!(!step.can_transition_to(TransferStep::Completed)); // no skipping
//! assert!(TransferStep::Completed.is_terminal());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Steps of the send-crypto wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TransferStep {
    /// Data entry: asset, recipient, amount, fee tier, note.
    #[default]
    Form = 0,

    /// Review of the complete transaction before sending.
    Confirm = 1,

    /// Simulated network round-trip in flight; no other transition allowed.
    Submitting = 2,

    /// Success display (terminal).
    Completed = 3,
}

impl TransferStep {
    /// Returns true if this is the terminal success state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if a submission is pending.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Returns the next step in the forward direction, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Form => Some(Self::Confirm),
            Self::Confirm => Some(Self::Submitting),
            Self::Submitting => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Returns the previous step in the backward direction, if any.
    ///
    /// `Submitting` and `Completed` cannot step back; the first step has no
    /// predecessor (retreating from it exits the flow).
    #[must_use]
    pub const fn prev(&self) -> Option<Self> {
        match self {
            Self::Confirm => Some(Self::Form),
            Self::Form | Self::Submitting | Self::Completed => None,
        }
    }

    /// Returns true if this state can transition to the target state.
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        self.next() == Some(target) || self.prev() == Some(target)
    }
}

impl fmt::Display for TransferStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Form => "FORM",
            Self::Confirm => "CONFIRM",
            Self::Submitting => "SUBMITTING",
            Self::Completed => "COMPLETED",
        };
        write!(f, "{s}")
    }
}

/// Steps of the crypto-pay wizard (before the QR scan hand-off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum PayStep {
    /// Choose which holding funds the payment.
    #[default]
    SelectAsset = 0,

    /// Bidirectional crypto/fiat conversion entry.
    Convert = 1,

    /// Payment method choice; launches the QR scan session.
    Pay = 2,
}

impl PayStep {
    /// Returns the next step, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::SelectAsset => Some(Self::Convert),
            Self::Convert => Some(Self::Pay),
            Self::Pay => None,
        }
    }

    /// Returns the previous step, if any.
    #[must_use]
    pub const fn prev(&self) -> Option<Self> {
        match self {
            Self::SelectAsset => None,
            Self::Convert => Some(Self::SelectAsset),
            Self::Pay => Some(Self::Convert),
        }
    }

    /// Returns true if this state can transition to the target state.
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        self.next() == Some(target) || self.prev() == Some(target)
    }

    /// One-based position for progress display.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> u8 {
        *self as u8 + 1
    }
}

impl fmt::Display for PayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SelectAsset => "SELECT_ASSET",
            Self::Convert => "CONVERT",
            Self::Pay => "PAY",
        };
        write!(f, "{s}")
    }
}

/// Phases of a QR scan-and-pay session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ScanPhase {
    /// Camera viewfinder active, waiting for a code.
    #[default]
    Scanning = 0,

    /// A merchant code was detected; amount entry.
    Detected = 1,

    /// Payment submission in flight.
    Paying = 2,

    /// Payment succeeded (terminal).
    Completed = 3,
}

impl ScanPhase {
    /// Returns true if this is the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if this state can transition to the target state.
    ///
    /// `Detected → Scanning` is the rescan edge; everything else is strictly
    /// forward.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Scanning, Self::Detected)
                | (Self::Detected, Self::Scanning)
                | (Self::Detected, Self::Paying)
                | (Self::Paying, Self::Completed)
        )
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scanning => "SCANNING",
            Self::Detected => "DETECTED",
            Self::Paying => "PAYING",
            Self::Completed => "COMPLETED",
        };
        write!(f, "{s}")
    }
}

/// Steps of a single-form flow (staking, fiat top-up, fiat transfer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum SubmitStep {
    /// Data entry.
    #[default]
    Form = 0,

    /// Simulated submission in flight.
    Submitting = 1,

    /// Success display (terminal).
    Completed = 2,
}

impl SubmitStep {
    /// Returns true if this is the terminal state.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if a submission is pending.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Returns true if this state can transition to the target state.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Form, Self::Submitting) | (Self::Submitting, Self::Completed)
        )
    }
}

impl fmt::Display for SubmitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Form => "FORM",
            Self::Submitting => "SUBMITTING",
            Self::Completed => "COMPLETED",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod transfer {
        use super::*;

        #[test]
        fn forward_path_is_linear() {
            assert_eq!(TransferStep::Form.next(), Some(TransferStep::Confirm));
            assert_eq!(TransferStep::Confirm.next(), Some(TransferStep::Submitting));
            assert_eq!(
                TransferStep::Submitting.next(),
                Some(TransferStep::Completed)
            );
            assert_eq!(TransferStep::Completed.next(), None);
        }

        #[test]
        fn no_skipping() {
            assert!(!TransferStep::Form.can_transition_to(TransferStep::Submitting));
            assert!(!TransferStep::Form.can_transition_to(TransferStep::Completed));
        }

        #[test]
        fn first_step_has_no_predecessor() {
            assert_eq!(TransferStep::Form.prev(), None);
        }

        #[test]
        fn submitting_admits_only_completion() {
            assert!(TransferStep::Submitting.can_transition_to(TransferStep::Completed));
            assert!(!TransferStep::Submitting.can_transition_to(TransferStep::Form));
            assert!(!TransferStep::Submitting.can_transition_to(TransferStep::Confirm));
        }

        #[test]
        fn completed_is_terminal() {
            assert!(TransferStep::Completed.is_terminal());
            for target in [
                TransferStep::Form,
                TransferStep::Confirm,
                TransferStep::Submitting,
            ] {
                assert!(!TransferStep::Completed.can_transition_to(target));
            }
        }

        #[test]
        fn confirm_can_step_back() {
            assert!(TransferStep::Confirm.can_transition_to(TransferStep::Form));
        }
    }

    mod pay {
        use super::*;

        #[test]
        fn positions_are_one_based() {
            assert_eq!(PayStep::SelectAsset.position(), 1);
            assert_eq!(PayStep::Convert.position(), 2);
            assert_eq!(PayStep::Pay.position(), 3);
        }

        #[test]
        fn strictly_adjacent_transitions() {
            assert!(PayStep::SelectAsset.can_transition_to(PayStep::Convert));
            assert!(PayStep::Convert.can_transition_to(PayStep::Pay));
            assert!(PayStep::Pay.can_transition_to(PayStep::Convert));
            assert!(!PayStep::SelectAsset.can_transition_to(PayStep::Pay));
        }
    }

    mod scan {
        use super::*;

        #[test]
        fn rescan_edge_goes_back_to_scanning() {
            assert!(ScanPhase::Detected.can_transition_to(ScanPhase::Scanning));
        }

        #[test]
        fn scanning_cannot_jump_to_payment() {
            assert!(!ScanPhase::Scanning.can_transition_to(ScanPhase::Paying));
            assert!(!ScanPhase::Scanning.can_transition_to(ScanPhase::Completed));
        }

        #[test]
        fn completed_is_terminal() {
            assert!(ScanPhase::Completed.is_terminal());
            for target in [ScanPhase::Scanning, ScanPhase::Detected, ScanPhase::Paying] {
                assert!(!ScanPhase::Completed.can_transition_to(target));
            }
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn form_to_submitting_to_completed() {
            assert!(SubmitStep::Form.can_transition_to(SubmitStep::Submitting));
            assert!(SubmitStep::Submitting.can_transition_to(SubmitStep::Completed));
            assert!(!SubmitStep::Form.can_transition_to(SubmitStep::Completed));
        }

        #[test]
        fn no_way_back() {
            assert!(!SubmitStep::Submitting.can_transition_to(SubmitStep::Form));
            assert!(!SubmitStep::Completed.can_transition_to(SubmitStep::Form));
        }

        #[test]
        fn display_formats() {
            assert_eq!(SubmitStep::Form.to_string(), "FORM");
            assert_eq!(SubmitStep::Submitting.to_string(), "SUBMITTING");
            assert_eq!(SubmitStep::Completed.to_string(), "COMPLETED");
        }
    }
}

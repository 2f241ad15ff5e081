//! # Flow Controllers
//!
//! Per-screen wizard controllers.
//!
//! All controllers share the same wizard contract:
//!
//! - `advance()` moves to the next step only when the current step's fields
//!   validate; otherwise it is a no-op. Callers disable the affordance via
//!   the matching `can_advance()`/`can_submit()` accessor.
//! - `retreat()` moves back unconditionally; at the first step it returns
//!   [`Retreat::Exit`] instead of stepping.
//! - `reset()` returns to the first step and clears every entered field.
//! - Submission is async, runs a configured simulated delay, cannot fail or
//!   be cancelled, and blocks every other transition while pending.

pub mod catalog_browser;
pub mod fiat_flow;
pub mod pay_flow;
pub mod receive_flow;
pub mod scan_session;
pub mod send_flow;
pub mod stake_flow;

pub use catalog_browser::CatalogBrowser;
pub use fiat_flow::{FiatFlow, FiatFlowKind};
pub use pay_flow::{PayFlow, PayHandoff};
pub use receive_flow::ReceiveFlow;
pub use scan_session::QrScanSession;
pub use send_flow::SendFlow;
pub use stake_flow::StakeFlow;

/// Outcome of a `retreat()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved to the previous step.
    SteppedBack,
    /// Was at the first step (or past the terminal step); the flow exits.
    Exit,
    /// A submission is pending; nothing may move.
    Blocked,
}

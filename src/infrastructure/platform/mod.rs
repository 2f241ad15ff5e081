//! # Platform Collaborators
//!
//! Thin traits over host platform services.
//!
//! The core logic relies on exactly one contract from these collaborators:
//! they accept a string and do not block. Failures are swallowed; a platform
//! without a capability is a silent no-op, never a crashed flow.

pub mod clipboard;
pub mod share;

pub use clipboard::{Clipboard, MemoryClipboard, NoopClipboard};
pub use share::{NoopShareSheet, ShareSheet};

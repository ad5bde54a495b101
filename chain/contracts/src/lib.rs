//! Smart Contract Logic for the Obligation Ledger
//!
//! This crate implements the contract layer for the permissioned
//! ledger: the rule sets that decide whether a proposed transaction
//! over obligation states is well-formed. Verification is a pure
//! function over the transaction alone, independent of any party's
//! trust or identity, so it can run anywhere a transaction needs
//! checking.
//!
//! # Modules
//! - `command`: Transaction intents (Issue, Transfer, Settle)
//! - `transaction`: The candidate state transition handed to the verifier
//! - `verifier`: Rule-group dispatch and predicate evaluation
//! - `errors`: Fatal errors and the named violation taxonomy
//!
//! # Version
//! v0.1.0 — Initial implementation

pub mod command;
pub mod errors;
pub mod transaction;
pub mod verifier;

pub use command::Command;
pub use errors::{VerifyError, Violation};
pub use transaction::LedgerTransaction;
pub use verifier::{verify, VerificationResult};

/// Contract ABI version — frozen after release
pub const CONTRACT_ABI_VERSION: &str = "1.0.0";

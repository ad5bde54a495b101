//! Contract-specific error types
//!
//! Two layers: fatal errors that abort verification before any rule
//! runs, and named rule violations that are collected per transaction.
//! Rejection is data, not an exception: a transaction that breaks
//! business rules yields an `Invalid` result listing every violation,
//! while `VerifyError` is reserved for malformed input and integration
//! bugs in the caller.

use thiserror::Error;
use types::money::{Amount, Currency};

/// Fatal verification errors
///
/// These abort verification outright instead of producing violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("A transaction must carry exactly one command, found {found}")]
    WrongCommandCount { found: usize },

    /// A command tag with no registered rule group. The command set is
    /// closed, so hitting this signals an integration bug in the
    /// caller, not a business-rule rejection.
    #[error("No rule group registered for command {kind}")]
    UnsupportedCommand { kind: &'static str },
}

/// A named business-rule violation
///
/// One variant per predicate in the rule groups; the display text is
/// the human-readable constraint it states. Violations are collected,
/// never thrown: a transaction is atomic and any violation rejects it
/// as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    // ─── Issue rules ───
    #[error("No inputs should be consumed when issuing an obligation")]
    IssueConsumesInputs,

    #[error("Only one output state should be created when issuing an obligation")]
    IssueOutputCount,

    #[error("A newly issued obligation must have a positive amount")]
    IssueNonPositiveAmount,

    #[error("The lender and borrower cannot have the same identity")]
    SharedIdentity,

    #[error("Both lender and borrower together only may sign an issue transaction")]
    IssueSigners,

    // ─── Transfer rules ───
    #[error("A transfer must consume exactly one input state")]
    TransferInputCount,

    #[error("A transfer must create exactly one output state")]
    TransferOutputCount,

    #[error("Only the lender property may change in a transfer")]
    TransferChangesMoreThanLender,

    #[error("The lender property must change in a transfer")]
    TransferLenderUnchanged,

    #[error("The borrower, old lender and new lender must sign a transfer transaction")]
    TransferSigners,

    // ─── Settle rules ───
    #[error("A settlement must consume exactly one input state")]
    SettleInputCount,

    #[error("A settlement must create at most one output state")]
    SettleOutputCount,

    #[error("The amount settled must be positive")]
    SettleNonPositiveAmount,

    #[error("Settlement currency {found} does not match the obligation currency {expected}")]
    SettleCurrencyMismatch { expected: Currency, found: Currency },

    #[error("The amount settled {settled} cannot exceed the amount outstanding {outstanding}")]
    SettleOverpayment {
        settled: Amount,
        outstanding: Amount,
    },

    #[error("Only the paid property may change during settlement")]
    SettleChangesMoreThanPaid,

    #[error("The paid property must increase by the amount settled")]
    SettlePaidMismatch,

    #[error("An obligation paid in full must be extinguished, not carried forward")]
    SettleFullyPaidNotExtinguished,

    #[error("An obligation may only be extinguished when paid in full")]
    SettleExtinguishedEarly,

    #[error("Both the lender and borrower must sign a settlement transaction")]
    SettleSigners,
}

//! Transaction verifier
//!
//! The single entry point deciding whether a candidate transaction is
//! well-formed: extract the one command, dispatch to its rule group,
//! evaluate every predicate in the group, and report either `Valid` or
//! every violated constraint. The verifier is a pure function with no
//! side effects, so it is safe to call concurrently from any number of
//! threads without coordination.
//!
//! Rule groups do not short-circuit: an audit of a rejected transaction
//! sees every problem at once, not just the first. Predicates that need
//! an absent input or output are skipped; the shape violation covering
//! that absence is already reported.

use std::collections::HashSet;

use types::money::Amount;
use types::obligation::Obligation;
use types::party::PublicKey;

use crate::command::Command;
use crate::errors::{VerifyError, Violation};
use crate::transaction::LedgerTransaction;

/// Outcome of verifying one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// Every predicate of the dispatched rule group holds
    Valid,
    /// At least one predicate failed; all failures, in rule order
    Invalid(Vec<Violation>),
}

impl VerificationResult {
    /// True if the transaction passed
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }

    /// The collected violations (empty when valid)
    pub fn violations(&self) -> &[Violation] {
        match self {
            VerificationResult::Valid => &[],
            VerificationResult::Invalid(violations) => violations,
        }
    }

    /// Human-readable messages for the collected violations, in rule order
    pub fn messages(&self) -> Vec<String> {
        self.violations().iter().map(ToString::to_string).collect()
    }
}

/// Verify a candidate transaction against its command's rule group
///
/// Fatal conditions (`VerifyError`) abort before rule evaluation:
/// a transaction must carry exactly one command. Business-rule
/// failures never abort; they are collected and returned as an
/// `Invalid` result.
pub fn verify(tx: &LedgerTransaction) -> Result<VerificationResult, VerifyError> {
    let command = match tx.commands.as_slice() {
        [command] => command,
        other => {
            return Err(VerifyError::WrongCommandCount {
                found: other.len(),
            })
        }
    };

    let violations = match command {
        Command::Issue => check_issue(tx),
        Command::Transfer => check_transfer(tx),
        Command::Settle { amount } => check_settle(tx, *amount),
    };

    if violations.is_empty() {
        Ok(VerificationResult::Valid)
    } else {
        Ok(VerificationResult::Invalid(violations))
    }
}

// ───────────────────────── Issue rules ─────────────────────────

fn check_issue(tx: &LedgerTransaction) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !tx.inputs.is_empty() {
        violations.push(Violation::IssueConsumesInputs);
    }
    if tx.outputs.len() != 1 {
        violations.push(Violation::IssueOutputCount);
    }

    if let Some(output) = tx.outputs.first() {
        if !output.amount().is_positive() {
            violations.push(Violation::IssueNonPositiveAmount);
        }
        if output.lender().key() == output.borrower().key() {
            violations.push(Violation::SharedIdentity);
        }

        // Both participants must sign, and nobody else: the signer set
        // matches the participant key set exactly.
        let participant_keys: HashSet<&PublicKey> =
            output.participants().iter().map(|p| p.key()).collect();
        let all_present = participant_keys.iter().all(|key| tx.signers.contains(*key));
        if !(all_present && tx.signers.len() == 2) {
            violations.push(Violation::IssueSigners);
        }
    }

    violations
}

// ───────────────────────── Transfer rules ─────────────────────────

fn check_transfer(tx: &LedgerTransaction) -> Vec<Violation> {
    let mut violations = Vec::new();

    if tx.inputs.len() != 1 {
        violations.push(Violation::TransferInputCount);
    }
    if tx.outputs.len() != 1 {
        violations.push(Violation::TransferOutputCount);
    }

    if let (Some(input), Some(output)) = (tx.inputs.first(), tx.outputs.first()) {
        if !only_lender_changed(input, output) {
            violations.push(Violation::TransferChangesMoreThanLender);
        }
        if input.lender().key() == output.lender().key() {
            violations.push(Violation::TransferLenderUnchanged);
        }
        if output.lender().key() == output.borrower().key() {
            violations.push(Violation::SharedIdentity);
        }

        // Everyone whose rights change signs: the outgoing lender, the
        // incoming lender, and the borrower.
        let required = [
            input.lender().key(),
            output.lender().key(),
            output.borrower().key(),
        ];
        if !required.iter().all(|key| tx.signers.contains(*key)) {
            violations.push(Violation::TransferSigners);
        }
    }

    violations
}

fn only_lender_changed(input: &Obligation, output: &Obligation) -> bool {
    input.amount() == output.amount()
        && input.paid() == output.paid()
        && input.borrower().key() == output.borrower().key()
        && input.id() == output.id()
}

// ───────────────────────── Settle rules ─────────────────────────

fn check_settle(tx: &LedgerTransaction, settled: Amount) -> Vec<Violation> {
    let mut violations = Vec::new();

    if tx.inputs.len() != 1 {
        violations.push(Violation::SettleInputCount);
    }
    if tx.outputs.len() > 1 {
        violations.push(Violation::SettleOutputCount);
    }
    if !settled.is_positive() {
        violations.push(Violation::SettleNonPositiveAmount);
    }

    if let Some(input) = tx.inputs.first() {
        if settled.currency() != input.amount().currency() {
            violations.push(Violation::SettleCurrencyMismatch {
                expected: input.amount().currency(),
                found: settled.currency(),
            });
        } else {
            check_settle_amounts(tx, input, settled, &mut violations);
        }

        let required = [input.lender().key(), input.borrower().key()];
        if !required.iter().all(|key| tx.signers.contains(*key)) {
            violations.push(Violation::SettleSigners);
        }
    }

    violations
}

fn check_settle_amounts(
    tx: &LedgerTransaction,
    input: &Obligation,
    settled: Amount,
    violations: &mut Vec<Violation>,
) {
    let outstanding = input
        .outstanding()
        .unwrap_or_else(|_| Amount::zero(input.amount().currency()));

    // Paying more than is owed is rejected outright; an i64 overflow of
    // paid + settled necessarily exceeds any representable amount.
    let expected_paid = match input.paid().checked_add(settled) {
        Ok(expected_paid) => {
            if expected_paid.quantity() > input.amount().quantity() {
                violations.push(Violation::SettleOverpayment {
                    settled,
                    outstanding,
                });
            }
            expected_paid
        }
        Err(_) => {
            violations.push(Violation::SettleOverpayment {
                settled,
                outstanding,
            });
            return;
        }
    };

    match tx.outputs.first() {
        Some(output) => {
            if !only_paid_changed(input, output) {
                violations.push(Violation::SettleChangesMoreThanPaid);
            }
            if output.paid() != expected_paid {
                violations.push(Violation::SettlePaidMismatch);
            }
            // A residual output only exists while something is still
            // owed; full settlement extinguishes the lineage instead.
            if expected_paid.quantity() >= input.amount().quantity() {
                violations.push(Violation::SettleFullyPaidNotExtinguished);
            }
        }
        None => {
            if expected_paid.quantity() != input.amount().quantity() {
                violations.push(Violation::SettleExtinguishedEarly);
            }
        }
    }
}

fn only_paid_changed(input: &Obligation, output: &Obligation) -> bool {
    input.amount() == output.amount()
        && input.lender().key() == output.lender().key()
        && input.borrower().key() == output.borrower().key()
        && input.id() == output.id()
}

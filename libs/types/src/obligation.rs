//! Obligation state
//!
//! The single instrument tracked by this ledger: a bilateral debt from
//! a borrower to a lender. An obligation is an immutable value; every
//! operation returns a new version, and the lineage id ties successive
//! versions together across transfers and settlements.
//!
//! The type is deliberately permissive about business rules: `pay` does
//! not cap `paid` at `amount`, and reconstructed versions are accepted
//! as-is. Whether a proposed new version is acceptable is decided by
//! the contract verifier, not by the value type.

use crate::errors::StateError;
use crate::ids::ObligationId;
use crate::money::Amount;
use crate::party::Party;
use serde::{Deserialize, Serialize};

/// One version of a bilateral obligation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    amount: Amount,
    lender: Party,
    borrower: Party,
    paid: Amount,
    id: ObligationId,
}

impl Obligation {
    /// Issue a new obligation lineage
    ///
    /// Requires a strictly positive amount and distinct lender/borrower
    /// keys. The new version starts with nothing paid and a fresh id.
    pub fn issue(amount: Amount, lender: Party, borrower: Party) -> Result<Self, StateError> {
        if !amount.is_positive() {
            return Err(StateError::NonPositiveAmount {
                quantity: amount.quantity(),
                currency: amount.currency(),
            });
        }
        if lender.key() == borrower.key() {
            return Err(StateError::SharedIdentity {
                name: lender.name().to_string(),
            });
        }
        let paid = Amount::zero(amount.currency());
        Ok(Self {
            amount,
            lender,
            borrower,
            paid,
            id: ObligationId::new(),
        })
    }

    /// Reconstruct an existing obligation version from stored fields
    ///
    /// Used when input states are resolved from ledger storage or a
    /// test harness assembles historic versions. New lineages should go
    /// through [`Obligation::issue`].
    pub fn from_parts(
        amount: Amount,
        lender: Party,
        borrower: Party,
        paid: Amount,
        id: ObligationId,
    ) -> Self {
        Self {
            amount,
            lender,
            borrower,
            paid,
            id,
        }
    }

    /// Record a payment of `increment` against this obligation
    ///
    /// Returns a new version with `paid` increased. The increment must
    /// be strictly positive and in the obligation's currency; whether
    /// the resulting `paid` stays within `amount` is a contract rule,
    /// not enforced here.
    pub fn pay(&self, increment: Amount) -> Result<Self, StateError> {
        if !increment.is_positive() {
            return Err(StateError::NonPositiveAmount {
                quantity: increment.quantity(),
                currency: increment.currency(),
            });
        }
        let paid = self.paid.checked_add(increment)?;
        Ok(Self {
            paid,
            ..self.clone()
        })
    }

    /// Reassign the lender, preserving everything else
    pub fn with_lender(&self, new_lender: Party) -> Self {
        Self {
            lender: new_lender,
            ..self.clone()
        }
    }

    /// Total amount owed
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Current lender
    pub fn lender(&self) -> &Party {
        &self.lender
    }

    /// Borrower
    pub fn borrower(&self) -> &Party {
        &self.borrower
    }

    /// Amount paid so far
    pub fn paid(&self) -> Amount {
        self.paid
    }

    /// Lineage identifier
    pub fn id(&self) -> ObligationId {
        self.id
    }

    /// The identities whose keys are candidates for required signers
    pub fn participants(&self) -> [&Party; 2] {
        [&self.lender, &self.borrower]
    }

    /// Amount still owed: `amount - paid`
    pub fn outstanding(&self) -> Result<Amount, StateError> {
        self.amount.checked_sub(self.paid)
    }

    /// True once `paid` has reached `amount`
    pub fn is_fully_paid(&self) -> bool {
        self.paid.quantity() >= self.amount.quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use crate::party::PublicKey;
    use ed25519_dalek::SigningKey;

    fn party(name: &str, seed: u8) -> Party {
        let key = PublicKey::from(SigningKey::from_bytes(&[seed; 32]).verifying_key());
        Party::new(name, key)
    }

    fn usd(quantity: i64) -> Amount {
        Amount::new(quantity, Currency::USD)
    }

    #[test]
    fn test_issue_starts_unpaid() {
        let iou = Obligation::issue(usd(10_000), party("Alice", 1), party("Bob", 2)).unwrap();
        assert_eq!(iou.amount(), usd(10_000));
        assert!(iou.paid().is_zero());
        assert_eq!(iou.paid().currency(), Currency::USD);
        assert!(!iou.is_fully_paid());
    }

    #[test]
    fn test_issue_assigns_fresh_ids() {
        let a = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let b = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_issue_rejects_non_positive_amount() {
        let result = Obligation::issue(usd(0), party("Alice", 1), party("Bob", 2));
        assert!(matches!(
            result,
            Err(StateError::NonPositiveAmount { quantity: 0, .. })
        ));
    }

    #[test]
    fn test_issue_rejects_shared_identity() {
        // Different display names, same owning key.
        let result = Obligation::issue(usd(100), party("Alice", 1), party("Alice Ltd", 1));
        assert!(matches!(result, Err(StateError::SharedIdentity { .. })));
    }

    #[test]
    fn test_pay_accumulates() {
        let iou = Obligation::issue(usd(10_000), party("Alice", 1), party("Bob", 2)).unwrap();
        let after = iou.pay(usd(4_000)).unwrap().pay(usd(2_500)).unwrap();
        assert_eq!(after.paid(), usd(6_500));
        assert_eq!(after.amount(), usd(10_000));
        assert_eq!(after.id(), iou.id());
    }

    #[test]
    fn test_pay_rejects_non_positive_increment() {
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        assert!(iou.pay(usd(0)).is_err());
        assert!(iou.pay(usd(-10)).is_err());
    }

    #[test]
    fn test_pay_rejects_currency_mismatch() {
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let result = iou.pay(Amount::new(10, Currency::EUR));
        assert!(matches!(result, Err(StateError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_pay_is_permissive_beyond_amount() {
        // Overpayment is a contract rule, not a value-type failure.
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let over = iou.pay(usd(150)).unwrap();
        assert_eq!(over.paid(), usd(150));
        assert!(over.is_fully_paid());
    }

    #[test]
    fn test_with_lender_changes_only_lender() {
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let moved = iou.with_lender(party("Carol", 3));
        assert_eq!(moved.lender().name(), "Carol");
        assert_eq!(moved.borrower(), iou.borrower());
        assert_eq!(moved.amount(), iou.amount());
        assert_eq!(moved.paid(), iou.paid());
        assert_eq!(moved.id(), iou.id());
    }

    #[test]
    fn test_participants_are_lender_and_borrower() {
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let [lender, borrower] = iou.participants();
        assert_eq!(lender.name(), "Alice");
        assert_eq!(borrower.name(), "Bob");
    }

    #[test]
    fn test_outstanding() {
        let iou = Obligation::issue(usd(10_000), party("Alice", 1), party("Bob", 2)).unwrap();
        let after = iou.pay(usd(4_000)).unwrap();
        assert_eq!(after.outstanding().unwrap(), usd(6_000));
    }

    #[test]
    fn test_fully_paid() {
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let settled = iou.pay(usd(100)).unwrap();
        assert!(settled.is_fully_paid());
        assert!(settled.outstanding().unwrap().is_zero());
    }

    #[test]
    fn test_obligation_serialization() {
        let iou = Obligation::issue(usd(100), party("Alice", 1), party("Bob", 2)).unwrap();
        let json = serde_json::to_string(&iou).unwrap();
        let deser: Obligation = serde_json::from_str(&json).unwrap();
        assert_eq!(iou, deser);
    }
}

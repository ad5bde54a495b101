//! Transaction commands
//!
//! The declared intent attached to a transaction, selecting which rule
//! group the verifier applies. A closed set: adding a command means
//! adding a rule group, so the enum is matched exhaustively and carries
//! only the data each intent needs.

use serde::{Deserialize, Serialize};
use types::money::Amount;

/// Declared intent of a ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Create a new obligation lineage
    Issue,
    /// Reassign the lender of an existing obligation
    Transfer,
    /// Pay down an existing obligation
    ///
    /// `amount` is the value transferred in this settlement step, an
    /// opaque fact established by the accompanying payment leg.
    Settle { amount: Amount },
}

impl Command {
    /// Stable label for messages and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Issue => "Issue",
            Command::Transfer => "Transfer",
            Command::Settle { .. } => "Settle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::money::Currency;

    #[test]
    fn test_command_kind() {
        assert_eq!(Command::Issue.kind(), "Issue");
        assert_eq!(Command::Transfer.kind(), "Transfer");
        let settle = Command::Settle {
            amount: Amount::new(100, Currency::USD),
        };
        assert_eq!(settle.kind(), "Settle");
    }

    #[test]
    fn test_command_serialization() {
        let settle = Command::Settle {
            amount: Amount::new(2500, Currency::EUR),
        };
        let json = serde_json::to_string(&settle).unwrap();
        let deser: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(settle, deser);
    }
}

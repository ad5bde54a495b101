//! Ledger transactions
//!
//! The verifier's input: a candidate state transition assembled by an
//! upstream transaction builder. It declares the input versions being
//! consumed, the output versions being produced, the commands carried,
//! and the keys that signed. Signature validity itself is checked
//! upstream; contract logic only reasons about which keys are present.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use types::obligation::Obligation;
use types::party::PublicKey;

use crate::command::Command;

/// A candidate ledger state transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    /// State versions consumed, in declaration order
    pub inputs: Vec<Obligation>,
    /// State versions produced, in declaration order
    pub outputs: Vec<Obligation>,
    /// Declared commands; well-formed transactions carry exactly one
    pub commands: Vec<Command>,
    /// Keys that signed the transaction
    pub signers: HashSet<PublicKey>,
}

impl LedgerTransaction {
    /// Assemble a transaction from its parts
    pub fn new(
        inputs: Vec<Obligation>,
        outputs: Vec<Obligation>,
        commands: Vec<Command>,
        signers: impl IntoIterator<Item = PublicKey>,
    ) -> Self {
        Self {
            inputs,
            outputs,
            commands,
            signers: signers.into_iter().collect(),
        }
    }

    /// Assemble a well-formed transaction carrying a single command
    pub fn single(
        inputs: Vec<Obligation>,
        outputs: Vec<Obligation>,
        command: Command,
        signers: impl IntoIterator<Item = PublicKey>,
    ) -> Self {
        Self::new(inputs, outputs, vec![command], signers)
    }

    /// Deterministic byte encoding of the whole transaction
    ///
    /// Sections are length-prefixed and integers big-endian; signer
    /// keys are sorted so the encoding is independent of set iteration
    /// order. Structurally equal transactions encode identically.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(&(self.inputs.len() as u32).to_be_bytes());
        for input in &self.inputs {
            push_obligation(&mut buf, input);
        }

        buf.extend_from_slice(&(self.outputs.len() as u32).to_be_bytes());
        for output in &self.outputs {
            push_obligation(&mut buf, output);
        }

        buf.extend_from_slice(&(self.commands.len() as u32).to_be_bytes());
        for command in &self.commands {
            match command {
                Command::Issue => buf.push(0),
                Command::Transfer => buf.push(1),
                Command::Settle { amount } => {
                    buf.push(2);
                    buf.extend_from_slice(&amount.quantity().to_be_bytes());
                    buf.extend_from_slice(amount.currency().code().as_bytes());
                }
            }
        }

        let mut signer_keys: Vec<&PublicKey> = self.signers.iter().collect();
        signer_keys.sort_by_key(|k| *k.as_bytes());
        buf.extend_from_slice(&(signer_keys.len() as u32).to_be_bytes());
        for key in signer_keys {
            buf.extend_from_slice(key.as_bytes());
        }

        buf
    }

    /// Transaction id: SHA-256 over the canonical encoding
    pub fn id(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_bytes());
        hasher.finalize().into()
    }
}

fn push_obligation(buf: &mut Vec<u8>, state: &Obligation) {
    buf.extend_from_slice(state.id().as_uuid().as_bytes());
    buf.extend_from_slice(&state.amount().quantity().to_be_bytes());
    buf.extend_from_slice(state.amount().currency().code().as_bytes());
    buf.extend_from_slice(&state.paid().quantity().to_be_bytes());
    buf.extend_from_slice(state.paid().currency().code().as_bytes());
    buf.extend_from_slice(state.lender().key().as_bytes());
    buf.extend_from_slice(state.borrower().key().as_bytes());
}

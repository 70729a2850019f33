use crate::tx::TransactionId;
use thiserror::Error;

/// A consensus-level transaction rule violation, reported by the acceptance engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TxRuleError {
    #[error("transaction is lacking a matching UTXO entry for at least one of its inputs")]
    MissingTxOutpoints,

    #[error("transaction {0} total input amount of {1} is below its total output amount of {2}")]
    InsufficientFunds(TransactionId, u64, u64),

    #[error("transaction {0} input {1} spends an immature coinbase output accepted at height {2}")]
    ImmatureCoinbaseSpend(TransactionId, usize, u64),

    #[error("transaction {0} failed script verification on input {1}")]
    ScriptVerificationFailed(TransactionId, usize),
}

impl TxRuleError {
    /// Machine-stable reject reason reported to callers and peers.
    pub fn reject_reason(&self) -> &'static str {
        match self {
            TxRuleError::MissingTxOutpoints => "missing-inputs",
            TxRuleError::InsufficientFunds(..) => "bad-txns-in-belowout",
            TxRuleError::ImmatureCoinbaseSpend(..) => "bad-txns-premature-spend-of-coinbase",
            TxRuleError::ScriptVerificationFailed(..) => "mandatory-script-verify-flag-failed",
        }
    }
}

pub type TxResult<T> = std::result::Result<T, TxRuleError>;

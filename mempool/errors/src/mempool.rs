use arbor_consensus_core::{
    errors::tx::TxRuleError,
    tx::{TransactionId, TransactionOutpoint},
};
use thiserror::Error;

/// The reason an individual transaction was rejected from the mempool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A consensus transaction rule error
    ///
    /// Note that TxRuleError::MissingTxOutpoints is converted to RuleError::RejectMissingOutpoint
    #[error(transparent)]
    RejectTxRule(TxRuleError),

    #[error("at least one outpoint of transaction is lacking a matching UTXO entry")]
    RejectMissingOutpoint,

    #[error("transaction {0} is already in the mempool")]
    RejectDuplicate(TransactionId),

    #[error("output {0} already spent by transaction {1} in the memory pool")]
    RejectDoubleSpendInMempool(TransactionOutpoint, TransactionId),

    #[error("transaction {0} virtual size of {1} is larger than the maximum allowed size of {2}")]
    RejectTransactionSize(TransactionId, u64, u64),

    #[error("transaction {0} version {1} is not in the valid range of {2}-{3}")]
    RejectVersion(TransactionId, u16, u16, u16),

    #[error("transaction {0} input {1} signature script size of {2} bytes is larger than the maximum allowed size of {3} bytes")]
    RejectSignatureScriptSize(TransactionId, usize, u64, u64),

    #[error("transaction {0} has a fee of {1} which is under the required relay fee of {2}")]
    RejectInsufficientFee(TransactionId, u64, u64),

    #[error("number of transactions in mempool ({0}) has reached the maximum allowed ({1})")]
    RejectMempoolIsFull(usize, usize),
}

impl RuleError {
    /// Machine-stable reject reason, surfaced verbatim in per-transaction package results.
    pub fn reject_reason(&self) -> &'static str {
        match self {
            RuleError::RejectTxRule(err) => err.reject_reason(),
            RuleError::RejectMissingOutpoint => "missing-inputs",
            RuleError::RejectDuplicate(_) => "txn-already-in-mempool",
            RuleError::RejectDoubleSpendInMempool(..) => "txn-mempool-conflict",
            RuleError::RejectTransactionSize(..) => "tx-size",
            RuleError::RejectVersion(..) => "version",
            RuleError::RejectSignatureScriptSize(..) => "scriptsig-size",
            RuleError::RejectInsufficientFee(..) => "min-relay-fee",
            RuleError::RejectMempoolIsFull(..) => "mempool-full",
        }
    }
}

impl From<TxRuleError> for RuleError {
    fn from(item: TxRuleError) -> Self {
        match item {
            TxRuleError::MissingTxOutpoints => RuleError::RejectMissingOutpoint,
            _ => RuleError::RejectTxRule(item),
        }
    }
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;

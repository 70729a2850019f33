use crate::{errors::tx::TxResult, tx::MutableTransaction};

/// Abstracts the chain-state collaborator consulted during mempool acceptance.
///
/// An implementor exposes one consistent snapshot of the chain UTXO set for the
/// duration of a validation call: `validate_mempool_transaction` populates any
/// UTXO entries still missing on the mutable transaction from that snapshot,
/// verifies the transaction against consensus rules and derives its fee. UTXO
/// entries already populated by the caller (outputs of pool-resident or
/// same-package parents) are kept as is.
pub trait ChainApi: Send + Sync {
    fn validate_mempool_transaction(&self, transaction: &mut MutableTransaction) -> TxResult<()>;
}

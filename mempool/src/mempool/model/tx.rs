use arbor_consensus_core::tx::{MutableTransaction, TransactionId};

/// A transaction resident in the pool, carrying its populated validation data.
#[derive(Debug, Clone)]
pub(crate) struct MempoolTransaction {
    pub(crate) mtx: MutableTransaction,
}

impl MempoolTransaction {
    pub(crate) fn new(mtx: MutableTransaction) -> Self {
        assert_eq!(mtx.tx.inputs.len(), mtx.entries.len());
        Self { mtx }
    }

    pub(crate) fn id(&self) -> TransactionId {
        self.mtx.id()
    }
}

use super::{
    map::{IdToTransactionMap, OutpointToIdMap},
    tx::MempoolTransaction,
};
use crate::{
    errors::{RuleError, RuleResult},
    mempool::config::Config,
};
use arbor_consensus_core::{
    constants::UNACCEPTED_BLOCK_HEIGHT,
    tx::{MutableTransaction, TransactionId, TransactionOutpoint, UtxoEntry},
};
use std::sync::Arc;

/// The pool of pending transactions, indexed by id and by spent outpoint.
pub(crate) struct TransactionsPool {
    config: Arc<Config>,
    /// All transactions in the pool
    all_transactions: IdToTransactionMap,
    /// Outpoints spent by pool transactions, pointing at the spending transaction
    spent_outpoints: OutpointToIdMap,
}

impl TransactionsPool {
    pub(crate) fn new(config: Arc<Config>) -> Self {
        Self { config, all_transactions: IdToTransactionMap::default(), spent_outpoints: OutpointToIdMap::default() }
    }

    pub(crate) fn len(&self) -> usize {
        self.all_transactions.len()
    }

    pub(crate) fn has(&self, transaction_id: &TransactionId) -> bool {
        self.all_transactions.contains_key(transaction_id)
    }

    pub(crate) fn get(&self, transaction_id: &TransactionId) -> Option<&MempoolTransaction> {
        self.all_transactions.get(transaction_id)
    }

    /// Returns an error if an input of the transaction spends an outpoint
    /// already spent by a pool-resident transaction.
    pub(crate) fn check_double_spends(&self, transaction: &MutableTransaction) -> RuleResult<()> {
        for input in transaction.tx.inputs.iter() {
            if let Some(spending_id) = self.spent_outpoints.get(&input.previous_outpoint) {
                if *spending_id != transaction.id() {
                    return Err(RuleError::RejectDoubleSpendInMempool(input.previous_outpoint, *spending_id));
                }
            }
        }
        Ok(())
    }

    /// Adds a fully validated transaction to the pool.
    pub(crate) fn add_transaction(&mut self, transaction: MutableTransaction) -> RuleResult<()> {
        if self.len() >= self.config.maximum_transaction_count {
            return Err(RuleError::RejectMempoolIsFull(self.len(), self.config.maximum_transaction_count));
        }
        let transaction = MempoolTransaction::new(transaction);
        let transaction_id = transaction.id();
        for input in transaction.mtx.tx.inputs.iter() {
            self.spent_outpoints.insert(input.previous_outpoint, transaction_id);
        }
        self.all_transactions.insert(transaction_id, transaction);
        Ok(())
    }

    /// The UTXO entry for an outpoint produced by a pool transaction, if any.
    pub(crate) fn get_outpoint_entry(&self, outpoint: &TransactionOutpoint) -> Option<UtxoEntry> {
        self.all_transactions.get(&outpoint.transaction_id).and_then(|parent| {
            parent
                .mtx
                .tx
                .outputs
                .get(outpoint.index as usize)
                .map(|output| UtxoEntry::new(output.value, output.script_public_key.clone(), UNACCEPTED_BLOCK_HEIGHT, false))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::create_placeholder_tx;
    use arbor_consensus_core::tx::MutableTransaction;

    #[test]
    fn test_pool_indexes_and_limits() {
        let config = Arc::new(Config { maximum_transaction_count: 1, ..Config::build_default(false) });
        let mut pool = TransactionsPool::new(config);

        let first = create_placeholder_tx(2, 2);
        pool.add_transaction(MutableTransaction::from_tx(first.clone())).unwrap();
        assert_eq!(pool.len(), 1);
        assert!(pool.has(&first.id()));

        // A transaction spending an outpoint already spent by the pool is a double spend
        let conflicting = {
            let mut inputs = first.inputs.clone();
            inputs.truncate(1);
            std::sync::Arc::new(arbor_consensus_core::tx::Transaction::new(first.version, inputs, first.outputs.clone(), 1))
        };
        match pool.check_double_spends(&MutableTransaction::from_tx(conflicting)) {
            Err(RuleError::RejectDoubleSpendInMempool(outpoint, spending_id)) => {
                assert_eq!(outpoint, first.inputs[0].previous_outpoint);
                assert_eq!(spending_id, first.id());
            }
            other => panic!("expected a double spend rejection, got {other:?}"),
        }

        // Outputs of pool transactions are exposed as unaccepted UTXO entries
        let entry = pool.get_outpoint_entry(&TransactionOutpoint::new(first.id(), 0)).unwrap();
        assert_eq!(entry.amount, first.outputs[0].value);
        assert_eq!(entry.block_height, UNACCEPTED_BLOCK_HEIGHT);
        assert!(pool.get_outpoint_entry(&TransactionOutpoint::new(first.id(), 5)).is_none());

        // The pool capacity is bounded
        let second = create_placeholder_tx(1, 1);
        match pool.add_transaction(MutableTransaction::from_tx(second)) {
            Err(RuleError::RejectMempoolIsFull(len, max)) => {
                assert_eq!((len, max), (1, 1));
            }
            other => panic!("expected a mempool-full rejection, got {other:?}"),
        }
    }
}

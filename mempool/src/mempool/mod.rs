use self::{config::Config, model::transactions_pool::TransactionsPool};
use arbor_consensus_core::tx::{MutableTransaction, TransactionId};
use std::sync::Arc;

pub(crate) mod check_transaction_standard;
pub mod config;
pub(crate) mod model;
pub(crate) mod validate_and_insert_transaction;

/// Mempool holds the pending transactions the node is willing to relay.
///
/// Some important properties to consider:
///
/// - Transactions can be chained, so a transaction can have unconfirmed parents
///   resident in the pool.
/// - During a package evaluation a transaction may additionally spend outputs
///   of earlier package members which are not pool resident yet; those are
///   provided to the validation pipeline through a package UTXO overlay.
/// - All mutating access is coordinated by [`crate::manager::MempoolManager`],
///   which guards this struct behind a single lock.
pub(crate) struct Mempool {
    config: Arc<Config>,
    transaction_pool: TransactionsPool,
}

impl Mempool {
    pub(crate) fn new(config: Arc<Config>) -> Self {
        let transaction_pool = TransactionsPool::new(config.clone());
        Self { config, transaction_pool }
    }

    pub(crate) fn has_transaction(&self, transaction_id: &TransactionId) -> bool {
        self.transaction_pool.has(transaction_id)
    }

    pub(crate) fn get_transaction(&self, transaction_id: &TransactionId) -> Option<MutableTransaction> {
        self.transaction_pool.get(transaction_id).map(|x| x.mtx.clone())
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transaction_pool.len()
    }
}

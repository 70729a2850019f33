use crate::{
    errors::RuleResult,
    mempool::{config::Config, model::overlay::PackageOverlay, Mempool},
    package::{check_package, Package, PackageAcceptResult, PackageValidationState, TxAcceptanceMetrics},
};
use arbor_consensus_core::{
    api::ChainApi,
    tx::{MutableTransaction, Transaction, TransactionId},
};
use log::debug;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// The entry point to the mempool, coordinating all mutating access behind a
/// single lock so that a package evaluation observes and mutates a consistent
/// pool state from start to finish.
pub struct MempoolManager {
    config: Arc<Config>,
    mempool: RwLock<Mempool>,
}

impl MempoolManager {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let mempool = RwLock::new(Mempool::new(config.clone()));
        Self { config, mempool }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transaction_count(&self) -> usize {
        self.mempool.read().transaction_count()
    }

    pub fn has_transaction(&self, transaction_id: &TransactionId) -> bool {
        self.mempool.read().has_transaction(transaction_id)
    }

    /// Validates a single transaction against the given chain view and, on
    /// success, inserts it into the pool.
    pub fn validate_and_insert_transaction(
        &self,
        chain: &dyn ChainApi,
        transaction: Arc<Transaction>,
    ) -> RuleResult<TxAcceptanceMetrics> {
        let transaction_id = transaction.id();
        let result = self.mempool.write().validate_and_insert_transaction(chain, transaction, &PackageOverlay::default(), false);
        match &result {
            Ok(metrics) => debug!("Accepted transaction {} into the mempool (fee: {})", transaction_id, metrics.fee),
            Err(err) => debug!("Rejected transaction {}: {}", transaction_id, err),
        }
        result
    }

    /// Validates an ordered package of transactions as a unit and, unless
    /// `test_accept` is set, inserts the accepted members into the pool.
    ///
    /// Members are evaluated in package order under a single exclusive lock,
    /// each allowed to spend outputs of earlier accepted members. Evaluation
    /// continues past individual failures so every member gets a result. With
    /// `test_accept` the pool is guaranteed to be left untouched.
    pub fn process_new_package(&self, chain: &dyn ChainApi, package: &Package, test_accept: bool) -> PackageAcceptResult {
        if let Err(err) = check_package(package) {
            debug!("Rejected package of {} transactions: {}", package.len(), err);
            return PackageAcceptResult::rejected(err);
        }

        let mut mempool = self.mempool.write();
        let mut tx_results: HashMap<TransactionId, RuleResult<TxAcceptanceMetrics>> = HashMap::with_capacity(package.len());
        let mut overlay = PackageOverlay::default();
        let mut package_fee = 0u64;
        let mut all_accepted = true;

        for transaction in package.iter() {
            let transaction_id = transaction.id();
            match mempool.validate_and_insert_transaction(chain, transaction.clone(), &overlay, test_accept) {
                Ok(metrics) => {
                    package_fee += metrics.fee;
                    // Expose the member's outputs and spends to later members.
                    // With test_accept the pool is untouched, so the overlay is
                    // the only place they exist.
                    overlay.add_transaction(transaction);
                    tx_results.insert(transaction_id, Ok(metrics));
                }
                Err(err) => {
                    debug!("Rejected package member {}: {}", transaction_id, err);
                    all_accepted = false;
                    tx_results.insert(transaction_id, Err(err));
                }
            }
        }

        // The aggregate fee is only known once the whole package was evaluated
        for result in tx_results.values_mut() {
            if let Ok(metrics) = result {
                metrics.package_fee = package_fee;
            }
        }

        let state = if all_accepted { PackageValidationState::Valid } else { PackageValidationState::MemberFailure };
        PackageAcceptResult { state, tx_results }
    }

    pub fn get_transaction(&self, transaction_id: &TransactionId) -> Option<MutableTransaction> {
        self.mempool.read().get_transaction(transaction_id)
    }
}

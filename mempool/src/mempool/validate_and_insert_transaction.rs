use super::Mempool;
use crate::{
    errors::{RuleError, RuleResult},
    mempool::model::overlay::PackageOverlay,
    package::TxAcceptanceMetrics,
};
use arbor_consensus_core::{
    api::ChainApi,
    mass::transaction_virtual_size,
    tx::{MutableTransaction, Transaction},
};
use std::sync::Arc;

impl Mempool {
    /// Drives one transaction through the full acceptance pipeline against the
    /// given chain view. Outputs produced and outpoints spent by earlier
    /// same-package members accepted in the current evaluation are visible
    /// through `overlay`. On success the transaction is inserted into the
    /// pool, unless `test_accept` is set in which case the pool is left
    /// untouched.
    pub(crate) fn validate_and_insert_transaction(
        &mut self,
        chain: &dyn ChainApi,
        transaction: Arc<Transaction>,
        overlay: &PackageOverlay,
        test_accept: bool,
    ) -> RuleResult<TxAcceptanceMetrics> {
        let mut transaction = MutableTransaction::from_tx(transaction);
        // Populate the virtual size first, it is used in multiple places throughout the validation.
        transaction.calculated_virtual_size = Some(transaction_virtual_size(&transaction.tx));

        self.validate_transaction_in_isolation(&transaction)?;
        self.transaction_pool.check_double_spends(&transaction)?;
        overlay.check_double_spends(&transaction)?;
        self.populate_entries(&mut transaction, overlay);
        chain.validate_mempool_transaction(&mut transaction)?;
        self.validate_transaction_in_context(&transaction)?;

        let fee = transaction.calculated_fee.unwrap();
        let metrics = TxAcceptanceMetrics {
            virtual_size: transaction.calculated_virtual_size.unwrap(),
            fee,
            package_fee: fee,
        };
        if !test_accept {
            self.transaction_pool.add_transaction(transaction)?;
        }
        Ok(metrics)
    }

    fn validate_transaction_in_isolation(&self, transaction: &MutableTransaction) -> RuleResult<()> {
        let transaction_id = transaction.id();
        if self.transaction_pool.has(&transaction_id) {
            return Err(RuleError::RejectDuplicate(transaction_id));
        }
        if !self.config.accept_non_standard {
            self.check_transaction_standard_in_isolation(transaction)?;
        }
        Ok(())
    }

    fn validate_transaction_in_context(&self, transaction: &MutableTransaction) -> RuleResult<()> {
        if !self.config.accept_non_standard {
            self.check_transaction_standard_in_context(transaction)?;
        }
        Ok(())
    }

    /// Fills UTXO entries for inputs spending outputs of pool-resident parents
    /// or of earlier package members, before the chain view is consulted.
    /// Remaining missing entries are the chain snapshot's responsibility.
    fn populate_entries(&self, transaction: &mut MutableTransaction, overlay: &PackageOverlay) {
        for (i, input) in transaction.tx.inputs.iter().enumerate() {
            if transaction.entries[i].is_some() {
                continue;
            }
            if let Some(entry) = self.transaction_pool.get_outpoint_entry(&input.previous_outpoint) {
                transaction.entries[i] = Some(entry);
            } else if let Some(entry) = overlay.get_outpoint_entry(&input.previous_outpoint) {
                transaction.entries[i] = Some(entry.clone());
            }
        }
    }
}

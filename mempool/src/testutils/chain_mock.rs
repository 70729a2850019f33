use arbor_consensus_core::{
    api::ChainApi,
    errors::tx::{TxResult, TxRuleError},
    tx::{MutableTransaction, Transaction, TransactionId, TransactionOutpoint, UtxoEntry},
    utxo::UtxoCollection,
};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// A chain view backed by in-memory maps, standing in for the acceptance
/// engine. UTXOs are registered through [`ChainMock::add_transaction`] and
/// failure outcomes can be forced per transaction id.
pub(crate) struct ChainMock {
    statuses: RwLock<HashMap<TransactionId, TxResult<()>>>,
    utxos: RwLock<UtxoCollection>,
}

impl ChainMock {
    pub(crate) fn new() -> Self {
        Self { statuses: RwLock::new(HashMap::new()), utxos: RwLock::new(UtxoCollection::new()) }
    }

    /// Forces the given validation outcome for the transaction id.
    pub(crate) fn set_status(&self, transaction_id: TransactionId, status: TxResult<()>) {
        self.statuses.write().insert(transaction_id, status);
    }

    /// Registers the outputs of the transaction as spendable chain UTXOs.
    pub(crate) fn add_transaction(&self, transaction: &Arc<Transaction>, block_height: u64) {
        let mut utxos = self.utxos.write();
        for (index, output) in transaction.outputs.iter().enumerate() {
            utxos.insert(
                TransactionOutpoint::new(transaction.id(), index as u32),
                UtxoEntry::new(output.value, output.script_public_key.clone(), block_height, transaction.is_coinbase()),
            );
        }
    }
}

impl ChainApi for ChainMock {
    fn validate_mempool_transaction(&self, transaction: &mut MutableTransaction) -> TxResult<()> {
        if let Some(status) = self.statuses.read().get(&transaction.id()) {
            status.clone()?;
        }

        // Keep pre-populated entries and fill the rest from the UTXO set
        let utxos = self.utxos.read();
        for (i, input) in transaction.tx.inputs.iter().enumerate() {
            if transaction.entries[i].is_none() {
                if let Some(entry) = utxos.get(&input.previous_outpoint) {
                    transaction.entries[i] = Some(entry.clone());
                }
            }
        }
        if !transaction.is_fully_populated() {
            return Err(TxRuleError::MissingTxOutpoints);
        }

        let total_in = transaction.total_input_amount().unwrap();
        let total_out = transaction.total_output_amount();
        if total_in < total_out {
            return Err(TxRuleError::InsufficientFunds(transaction.id(), total_in, total_out));
        }
        transaction.calculated_fee = Some(total_in - total_out);
        Ok(())
    }
}

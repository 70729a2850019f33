use super::map::OutpointToIdMap;
use crate::errors::{RuleError, RuleResult};
use arbor_consensus_core::{
    constants::UNACCEPTED_BLOCK_HEIGHT,
    tx::{MutableTransaction, Transaction, TransactionOutpoint, UtxoEntry},
    utxo::UtxoCollection,
};
use std::sync::Arc;

/// The in-flight view of a package evaluation: outputs produced and outpoints
/// spent by the members accepted so far. Consulted alongside the pool for both
/// entry population and conflict detection, so that a test-accept dry run
/// reaches the same verdict as an actual submission.
#[derive(Default)]
pub(crate) struct PackageOverlay {
    utxos: UtxoCollection,
    spent_outpoints: OutpointToIdMap,
}

impl PackageOverlay {
    /// Registers an accepted member: its outputs become spendable by later
    /// members and its spends conflict with later members.
    pub(crate) fn add_transaction(&mut self, transaction: &Arc<Transaction>) {
        let transaction_id = transaction.id();
        for input in transaction.inputs.iter() {
            self.spent_outpoints.insert(input.previous_outpoint, transaction_id);
        }
        for (index, output) in transaction.outputs.iter().enumerate() {
            self.utxos.insert(
                TransactionOutpoint::new(transaction_id, index as u32),
                UtxoEntry::new(output.value, output.script_public_key.clone(), UNACCEPTED_BLOCK_HEIGHT, false),
            );
        }
    }

    pub(crate) fn get_outpoint_entry(&self, outpoint: &TransactionOutpoint) -> Option<&UtxoEntry> {
        self.utxos.get(outpoint)
    }

    /// Returns an error if an input of the transaction spends an outpoint
    /// already spent by an accepted member of the same evaluation.
    pub(crate) fn check_double_spends(&self, transaction: &MutableTransaction) -> RuleResult<()> {
        for input in transaction.tx.inputs.iter() {
            if let Some(spending_id) = self.spent_outpoints.get(&input.previous_outpoint) {
                return Err(RuleError::RejectDoubleSpendInMempool(input.previous_outpoint, *spending_id));
            }
        }
        Ok(())
    }
}

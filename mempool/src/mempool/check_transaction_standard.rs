use super::Mempool;
use crate::errors::{RuleError, RuleResult};
use arbor_consensus_core::tx::MutableTransaction;

/// MAXIMUM_STANDARD_SIGNATURE_SCRIPT_SIZE is the maximum size allowed for a
/// transaction input signature script to be considered standard. The value
/// allows a 15-of-15 multisig spend with compressed keys, plus a small buffer.
pub(crate) const MAXIMUM_STANDARD_SIGNATURE_SCRIPT_SIZE: u64 = 1650;

impl Mempool {
    /// Standardness checks requiring no knowledge of the spent outputs.
    pub(crate) fn check_transaction_standard_in_isolation(&self, transaction: &MutableTransaction) -> RuleResult<()> {
        let transaction_id = transaction.id();

        // The transaction must be a currently supported version.
        if transaction.tx.version > self.config.maximum_standard_transaction_version
            || transaction.tx.version < self.config.minimum_standard_transaction_version
        {
            return Err(RuleError::RejectVersion(
                transaction_id,
                transaction.tx.version,
                self.config.minimum_standard_transaction_version,
                self.config.maximum_standard_transaction_version,
            ));
        }

        // Since extremely large transactions with a lot of inputs can cost
        // almost as much to process as the sender pays in fees, limit the
        // maximum virtual size of a transaction. This also helps mitigate
        // CPU exhaustion attacks.
        let virtual_size = transaction.calculated_virtual_size.unwrap();
        if virtual_size > self.config.maximum_standard_transaction_virtual_size {
            return Err(RuleError::RejectTransactionSize(
                transaction_id,
                virtual_size,
                self.config.maximum_standard_transaction_virtual_size,
            ));
        }

        for (i, input) in transaction.tx.inputs.iter().enumerate() {
            // Each transaction input signature script must not exceed the
            // maximum size allowed for a standard transaction.
            let signature_script_len = input.signature_script.len() as u64;
            if signature_script_len > MAXIMUM_STANDARD_SIGNATURE_SCRIPT_SIZE {
                return Err(RuleError::RejectSignatureScriptSize(
                    transaction_id,
                    i,
                    signature_script_len,
                    MAXIMUM_STANDARD_SIGNATURE_SCRIPT_SIZE,
                ));
            }
        }

        Ok(())
    }

    /// Standardness checks requiring the transaction fee, hence fully populated
    /// UTXO entries.
    pub(crate) fn check_transaction_standard_in_context(&self, transaction: &MutableTransaction) -> RuleResult<()> {
        let fee = transaction.calculated_fee.unwrap();
        let virtual_size = transaction.calculated_virtual_size.unwrap();
        // minimum_relay_transaction_fee is in satoshis per 1000 virtual bytes
        let minimum_fee = (self.config.minimum_relay_transaction_fee * virtual_size).div_ceil(1000);
        if fee < minimum_fee {
            return Err(RuleError::RejectInsufficientFee(transaction.id(), fee, minimum_fee));
        }
        Ok(())
    }
}

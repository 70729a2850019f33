use crate::tx::{Transaction, TransactionId};
use arbor_hashes::TransactionHash;

/// Computes the transaction id as the double-SHA256 of the canonical field encoding.
pub fn transaction_id(tx: &Transaction) -> TransactionId {
    let mut hasher = TransactionHash::new();
    hasher.update(tx.version.to_le_bytes()).update((tx.inputs.len() as u64).to_le_bytes());
    for input in tx.inputs.iter() {
        hasher
            .update(input.previous_outpoint.transaction_id.as_bytes())
            .update(input.previous_outpoint.index.to_le_bytes())
            .update((input.signature_script.len() as u64).to_le_bytes())
            .update(&input.signature_script)
            .update(input.sequence.to_le_bytes())
            .update([input.sig_op_count]);
    }
    hasher.update((tx.outputs.len() as u64).to_le_bytes());
    for output in tx.outputs.iter() {
        hasher
            .update(output.value.to_le_bytes())
            .update(output.script_public_key.version().to_le_bytes())
            .update((output.script_public_key.script().len() as u64).to_le_bytes())
            .update(output.script_public_key.script());
    }
    hasher.update(tx.lock_time.to_le_bytes());
    hasher.finalize()
}

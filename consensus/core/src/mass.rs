use crate::tx::{Transaction, TransactionInput, TransactionOutput};
use arbor_hashes::HASH_SIZE;

/// Number of virtual bytes charged per signature operation.
pub const BYTES_PER_SIG_OP: u64 = 20;

// transaction_estimated_serialized_size is the estimated size of a transaction in some
// serialization. This has to be deterministic, but not necessarily accurate, since
// it's only used as the byte-size component in the virtual size calculation.
pub fn transaction_estimated_serialized_size(tx: &Transaction) -> u64 {
    let mut size: u64 = 0;
    size += 2; // Tx version (u16)
    size += 8; // Number of inputs (u64)
    let inputs_size: u64 = tx.inputs.iter().map(transaction_input_estimated_serialized_size).sum();
    size += inputs_size;

    size += 8; // Number of outputs (u64)
    let outputs_size: u64 = tx.outputs.iter().map(transaction_output_estimated_serialized_size).sum();
    size += outputs_size;

    size += 4; // Lock time (u32)
    size
}

fn transaction_input_estimated_serialized_size(input: &TransactionInput) -> u64 {
    let mut size = 0;
    size += outpoint_estimated_serialized_size();

    size += 8; // Length of signature script (u64)
    size += input.signature_script.len() as u64;

    size += 4; // Sequence (u32)
    size += 1; // Sig op count (u8)
    size
}

const fn outpoint_estimated_serialized_size() -> u64 {
    let mut size: u64 = 0;
    size += HASH_SIZE as u64; // Previous tx ID
    size += 4; // Index (u32)
    size
}

pub fn transaction_output_estimated_serialized_size(output: &TransactionOutput) -> u64 {
    let mut size: u64 = 0;
    size += 8; // Value (u64)
    size += 2; // Script public key version (u16)
    size += 8; // Length of script public key (u64)
    size += output.script_public_key.script().len() as u64;
    size
}

/// The virtual size of a transaction: its estimated serialized size or the
/// aggregate cost of its signature operations, whichever is larger. All
/// relay-level size and fee-rate limits are expressed in virtual bytes.
pub fn transaction_virtual_size(tx: &Transaction) -> u64 {
    let size = transaction_estimated_serialized_size(tx);
    let sig_op_cost = tx.inputs.iter().map(|input| input.sig_op_count as u64).sum::<u64>() * BYTES_PER_SIG_OP;
    size.max(sig_op_cost)
}

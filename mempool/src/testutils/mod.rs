mod chain_mock;

pub(crate) use chain_mock::ChainMock;

use arbor_consensus_core::{
    constants::{MAX_TX_IN_SEQUENCE_NUM, SATOSHIS_PER_COIN, TX_VERSION},
    tx::{ScriptPublicKey, Transaction, TransactionId, TransactionInput, TransactionOutpoint, TransactionOutput},
};
use rand::Rng;
use std::sync::Arc;

pub(crate) fn random_id() -> TransactionId {
    let mut bytes = [0u8; arbor_hashes::HASH_SIZE];
    rand::thread_rng().fill(&mut bytes[..]);
    TransactionId::from_bytes(bytes)
}

pub(crate) fn create_input(previous_outpoint: TransactionOutpoint) -> TransactionInput {
    TransactionInput::new(previous_outpoint, vec![0u8; 66], MAX_TX_IN_SEQUENCE_NUM, 1)
}

pub(crate) fn create_output(value: u64) -> TransactionOutput {
    TransactionOutput::new(value, ScriptPublicKey::from_vec(0, vec![0u8; 66]))
}

pub(crate) fn create_transaction(inputs: Vec<TransactionInput>, output_values: Vec<u64>) -> Arc<Transaction> {
    let outputs = output_values.into_iter().map(create_output).collect();
    Arc::new(Transaction::new(TX_VERSION, inputs, outputs, 0))
}

/// A well-formed transaction spending `num_inputs` random outpoints and paying
/// 0.01 coin per output. The random outpoints make every call produce a
/// distinct transaction, unknown to any chain view until registered there.
pub(crate) fn create_placeholder_tx(num_inputs: u32, num_outputs: u32) -> Arc<Transaction> {
    let inputs = (0..num_inputs).map(|i| create_input(TransactionOutpoint::new(random_id(), i))).collect();
    create_transaction(inputs, vec![SATOSHIS_PER_COIN / 100; num_outputs as usize])
}

/// A transaction spending the `output_indexes` of each of the given parents,
/// paying out the given values.
pub(crate) fn create_child_tx(parents: &[(&Arc<Transaction>, u32)], output_values: Vec<u64>) -> Arc<Transaction> {
    let inputs =
        parents.iter().map(|(parent, index)| create_input(TransactionOutpoint::new(parent.id(), *index))).collect();
    create_transaction(inputs, output_values)
}

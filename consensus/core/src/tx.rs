use crate::hashing;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

/// Size of the inline portion of the script vector of a script public key.
pub const SCRIPT_VECTOR_SIZE: usize = 36;

/// Used as the underlying type for script public key data, optimized for the common small script sizes.
pub type ScriptVec = SmallVec<[u8; SCRIPT_VECTOR_SIZE]>;

/// Alias the `smallvec!` macro to ease maintenance
pub use smallvec::smallvec as scriptvec;

/// Represents the ID of an Arbor transaction
pub type TransactionId = arbor_hashes::Hash;

/// Represents an Arbor script public key
#[derive(Default, Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct ScriptPublicKey {
    version: u16,
    script: ScriptVec, // Kept private to preserve read-only semantics
}

impl ScriptPublicKey {
    pub fn new(version: u16, script: ScriptVec) -> Self {
        Self { version, script }
    }

    pub fn from_vec(version: u16, script: Vec<u8>) -> Self {
        Self { version, script: ScriptVec::from_vec(script) }
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }
}

/// Holds details about an individual transaction output in a UTXO set, such as
/// whether or not it originates from a coinbase transaction, the height of the
/// block accepting it, its script public key and how much it pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoEntry {
    pub amount: u64,
    pub script_public_key: ScriptPublicKey,
    pub block_height: u64,
    pub is_coinbase: bool,
}

impl UtxoEntry {
    pub fn new(amount: u64, script_public_key: ScriptPublicKey, block_height: u64, is_coinbase: bool) -> Self {
        Self { amount, script_public_key, block_height, is_coinbase }
    }
}

/// Represents an Arbor transaction outpoint
#[derive(Eq, Hash, PartialEq, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: u32,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: u32) -> Self {
        Self { transaction_id, index }
    }
}

impl Display for TransactionOutpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.transaction_id, self.index)
    }
}

/// Represents an Arbor transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    pub signature_script: Vec<u8>,
    pub sequence: u32,
    pub sig_op_count: u8,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: Vec<u8>, sequence: u32, sig_op_count: u8) -> Self {
        Self { previous_outpoint, signature_script, sequence, sig_op_count }
    }
}

/// Represents an Arbor transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_public_key: ScriptPublicKey,
}

impl TransactionOutput {
    pub fn new(value: u64, script_public_key: ScriptPublicKey) -> Self {
        Self { value, script_public_key }
    }
}

/// Represents an Arbor transaction.
///
/// Immutable once constructed: the id is derived from the field encoding by the
/// constructor and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u16,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,

    // A field that caches the transaction id
    id: TransactionId,
}

impl Transaction {
    pub fn new(version: u16, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        let mut tx = Self { version, inputs, outputs, lock_time, id: Default::default() };
        tx.finalize();
        tx
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.is_empty()
    }

    fn finalize(&mut self) {
        self.id = hashing::transaction_id(self);
    }
}

/// Represents a transaction during mempool validation: the immutable inner
/// transaction along with the UTXO entries its inputs spend and data derived
/// while validating it.
#[derive(Debug, Clone)]
pub struct MutableTransaction {
    /// The inner transaction
    pub tx: Arc<Transaction>,
    /// Populated UTXO entry data, one slot per input
    pub entries: Vec<Option<UtxoEntry>>,
    /// Populated fee
    pub calculated_fee: Option<u64>,
    /// Populated virtual size
    pub calculated_virtual_size: Option<u64>,
}

impl MutableTransaction {
    pub fn from_tx(tx: Arc<Transaction>) -> Self {
        Self { entries: vec![None; tx.inputs.len()], tx, calculated_fee: None, calculated_virtual_size: None }
    }

    pub fn id(&self) -> TransactionId {
        self.tx.id()
    }

    pub fn is_fully_populated(&self) -> bool {
        self.entries.iter().all(Option::is_some)
    }

    /// Returns the previous outpoints of inputs which still lack a UTXO entry
    pub fn missing_outpoints(&self) -> impl Iterator<Item = TransactionOutpoint> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| entry.is_none().then(|| self.tx.inputs[i].previous_outpoint))
    }

    /// Total amount over the populated entries, or `None` if some input is not populated yet
    pub fn total_input_amount(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.as_ref().map(|entry| entry.amount)).sum()
    }

    pub fn total_output_amount(&self) -> u64 {
        self.tx.outputs.iter().map(|output| output.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TX_VERSION;

    fn build_tx(lock_time: u32) -> Transaction {
        let input = TransactionInput::new(TransactionOutpoint::new(7.into(), 0), vec![1, 2, 3], 0, 1);
        let output = TransactionOutput::new(1000, ScriptPublicKey::new(0, scriptvec![5; 25]));
        Transaction::new(TX_VERSION, vec![input], vec![output], lock_time)
    }

    #[test]
    fn test_transaction_id_is_deterministic() {
        assert_eq!(build_tx(0).id(), build_tx(0).id());
        assert_ne!(build_tx(0).id(), build_tx(1).id());
    }

    #[test]
    fn test_mutable_transaction_population() {
        let tx = Arc::new(build_tx(0));
        let mut mtx = MutableTransaction::from_tx(tx.clone());
        assert!(!mtx.is_fully_populated());
        assert_eq!(mtx.missing_outpoints().collect::<Vec<_>>(), vec![tx.inputs[0].previous_outpoint]);
        assert_eq!(mtx.total_input_amount(), None);

        mtx.entries[0] = Some(UtxoEntry::new(1500, ScriptPublicKey::default(), 1, false));
        assert!(mtx.is_fully_populated());
        assert_eq!(mtx.total_input_amount(), Some(1500));
        assert_eq!(mtx.total_output_amount(), 1000);
    }
}

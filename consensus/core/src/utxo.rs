use crate::tx::{TransactionOutpoint, UtxoEntry};
use std::collections::HashMap;

/// A collection of UTXO entries indexed by their outpoint
pub type UtxoCollection = HashMap<TransactionOutpoint, UtxoEntry>;

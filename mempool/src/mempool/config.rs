use arbor_consensus_core::constants::TX_VERSION;

pub(crate) const DEFAULT_MAXIMUM_TRANSACTION_COUNT: usize = 1_000_000;

/// The maximum virtual size of a transaction considered standard and therefore relayed.
pub(crate) const DEFAULT_MAXIMUM_STANDARD_TRANSACTION_VIRTUAL_SIZE: u64 = 100_000;

pub(crate) const DEFAULT_MINIMUM_STANDARD_TRANSACTION_VERSION: u16 = 1;
pub(crate) const DEFAULT_MAXIMUM_STANDARD_TRANSACTION_VERSION: u16 = TX_VERSION;

/// DEFAULT_MINIMUM_RELAY_TRANSACTION_FEE specifies the minimum fee for a transaction
/// to be accepted to the mempool and relayed. It is specified in satoshis per 1000
/// virtual bytes.
pub(crate) const DEFAULT_MINIMUM_RELAY_TRANSACTION_FEE: u64 = 1_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub maximum_transaction_count: usize,
    pub maximum_standard_transaction_virtual_size: u64,
    pub minimum_standard_transaction_version: u16,
    pub maximum_standard_transaction_version: u16,
    pub minimum_relay_transaction_fee: u64,
    pub accept_non_standard: bool,
}

impl Config {
    pub fn new(
        maximum_transaction_count: usize,
        maximum_standard_transaction_virtual_size: u64,
        minimum_standard_transaction_version: u16,
        maximum_standard_transaction_version: u16,
        minimum_relay_transaction_fee: u64,
        accept_non_standard: bool,
    ) -> Self {
        Self {
            maximum_transaction_count,
            maximum_standard_transaction_virtual_size,
            minimum_standard_transaction_version,
            maximum_standard_transaction_version,
            minimum_relay_transaction_fee,
            accept_non_standard,
        }
    }

    /// Build a default config.
    pub fn build_default(relay_non_std_transactions: bool) -> Self {
        Self {
            maximum_transaction_count: DEFAULT_MAXIMUM_TRANSACTION_COUNT,
            maximum_standard_transaction_virtual_size: DEFAULT_MAXIMUM_STANDARD_TRANSACTION_VIRTUAL_SIZE,
            minimum_standard_transaction_version: DEFAULT_MINIMUM_STANDARD_TRANSACTION_VERSION,
            maximum_standard_transaction_version: DEFAULT_MAXIMUM_STANDARD_TRANSACTION_VERSION,
            minimum_relay_transaction_fee: DEFAULT_MINIMUM_RELAY_TRANSACTION_FEE,
            accept_non_standard: relay_non_std_transactions,
        }
    }
}

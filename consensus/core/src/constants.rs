/// The number of satoshis in one coin.
pub const SATOSHIS_PER_COIN: u64 = 100_000_000;

/// Current transaction version.
pub const TX_VERSION: u16 = 2;

/// Maximum sequence number a transaction input can carry.
pub const MAX_TX_IN_SEQUENCE_NUM: u32 = u32::MAX;

/// Block height assigned to UTXO entries built from outputs of transactions
/// which are not yet accepted into a block (pool-resident or same-package parents).
pub const UNACCEPTED_BLOCK_HEIGHT: u64 = u64::MAX;

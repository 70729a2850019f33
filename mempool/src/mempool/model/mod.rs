pub(crate) mod map;
pub(crate) mod overlay;
pub(crate) mod transactions_pool;
pub(crate) mod tx;

pub mod api;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod mass;
pub mod tx;
pub mod utxo;

pub mod errors;
pub mod manager;
pub mod mempool;
pub mod package;


#[cfg(test)]
pub(crate) mod testutils;

pub use manager::MempoolManager;

/// Re-export errors
pub use arbor_mempool_errors::{mempool::*, package::*};

use crate::{Hash, HASH_SIZE};
use sha2::{Digest, Sha256};

/// A double-SHA256 writer, used to derive transaction ids.
#[derive(Clone, Default)]
pub struct TransactionHash(Sha256);

impl TransactionHash {
    #[inline(always)]
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    pub fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
        self.0.update(data.as_ref());
        self
    }

    #[inline(always)]
    pub fn finalize(self) -> Hash {
        let mut bytes = [0u8; HASH_SIZE];
        bytes.copy_from_slice(&Sha256::digest(self.0.finalize()));
        Hash::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionHash;
    use std::str::FromStr;

    #[test]
    fn test_double_sha256_vector() {
        let mut hasher = TransactionHash::new();
        hasher.update(b"ab").update(b"c");
        let expected = crate::Hash::from_str("4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358").unwrap();
        assert_eq!(hasher.finalize(), expected);
    }
}

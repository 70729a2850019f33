mod hashers;

pub use hashers::TransactionHash;

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::{self, FromStr};

/// The size in bytes of a hash.
pub const HASH_SIZE: usize = 32;

pub const ZERO_HASH: Hash = Hash([0u8; HASH_SIZE]);

/// A 32-byte content hash, used among others as a transaction identifier.
/// Equality is bitwise and the value is immutable once constructed.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    pub const fn as_bytes(&self) -> [u8; HASH_SIZE] {
        self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut hex = [0u8; HASH_SIZE * 2];
        f.write_str(faster_hex::hex_encode(&self.0, &mut hex).expect("the output is exactly twice the size of the input"))
    }
}

impl Debug for Hash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Hash {
    type Err = faster_hex::Error;

    fn from_str(hash_str: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_SIZE];
        faster_hex::hex_decode(hash_str.as_bytes(), &mut bytes)?;
        Ok(Hash(bytes))
    }
}

impl From<u64> for Hash {
    fn from(word: u64) -> Self {
        let mut bytes = [0u8; HASH_SIZE];
        bytes[..8].copy_from_slice(&word.to_le_bytes());
        Hash(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Hash, ZERO_HASH};
    use std::str::FromStr;

    #[test]
    fn test_hash_basics() {
        let hash_str = "8e40af02265360d59f4ecf9ae9ebf8f00a3118408f5a9cdcbcc9c0f93642f3af";
        let hash = Hash::from_str(hash_str).unwrap();
        assert_eq!(hash_str, hash.to_string());
        let hash2 = Hash::from_str(hash_str).unwrap();
        assert_eq!(hash, hash2);

        let hash3 = Hash::from_str("8e40af02265360d59f4ecf9ae9ebf8f00a3118408f5a9cdcbcc9c0f93642f3ab").unwrap();
        assert_ne!(hash2, hash3);

        let odd_str = "8e40af02265360d59f4ecf9ae9ebf8f00a3118408f5a9cdcbcc9c0f93642f3a";
        let short_str = "8e40af02265360d59f4ecf9ae9ebf8f00a3118408f5a9cdcbcc9c0f93642f3";
        assert!(Hash::from_str(odd_str).is_err());
        assert!(Hash::from_str(short_str).is_err());

        assert_eq!(ZERO_HASH.to_string(), "0".repeat(64));
        assert_eq!(Hash::from(6u64), Hash::from_str("0600000000000000000000000000000000000000000000000000000000000000").unwrap());
    }
}

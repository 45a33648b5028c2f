//! Hash functions mapping a key onto a bucket index.
//!
//! A hash function receives the key and the current bucket count and must
//! return an index in `[0, modulus)`, always the same one for the same key
//! and modulus. Hash quality affects chain length only, never correctness.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

pub trait HashFunction<K: ?Sized> {
    /// Returns a bucket index for a key. `modulus` is at least 1.
    fn hash(&self, key: &K, modulus: usize) -> usize;
}

impl<K: ?Sized, F: Fn(&K, usize) -> usize> HashFunction<K> for F {
    fn hash(&self, key: &K, modulus: usize) -> usize {
        self(key, modulus)
    }
}

/// Sums the character codes of a string key.
#[derive(Clone, Copy, Debug, Default)]
pub struct SumHash;

impl<K: AsRef<str> + ?Sized> HashFunction<K> for SumHash {
    fn hash(&self, key: &K, modulus: usize) -> usize {
        key.as_ref()
            .chars()
            .fold(0usize, |sum, character| sum.wrapping_add(character as usize))
            % modulus
    }
}

/// Hashes any `Hash` key with the standard library's default hasher.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdHash;

impl<K: Hash + ?Sized> HashFunction<K> for StdHash {
    fn hash(&self, key: &K, modulus: usize) -> usize {
        let mut hasher = DefaultHasher::new();

        Hash::hash(key, &mut hasher);

        (hasher.finish() % modulus as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;

    #[test]
    fn sum_hash() {
        assert_eq!(SumHash.hash("", 7), 0);
        assert_eq!(SumHash.hash("a", 1000), 97);
        assert_eq!(SumHash.hash("ab", 1000), 97 + 98);
        assert_eq!(SumHash.hash("tom", 1), 0);
        assert_eq!(SumHash.hash(&"tom".to_string(), 10), (116 + 111 + 109) % 10);
    }

    #[test]
    fn std_hash_in_range() {
        for _ in 0..1 << 10 {
            let key: u64 = random();
            let modulus = random::<u16>() as usize + 1;

            assert!(StdHash.hash(&key, modulus) < modulus);
        }
    }

    #[test]
    fn std_hash_deterministic() {
        assert_eq!(StdHash.hash("oxygen", 32), StdHash.hash("oxygen", 32));
    }

    #[test]
    fn closure() {
        let hash = |key: &usize, modulus: usize| key % modulus;

        assert_eq!(HashFunction::hash(&hash, &10, 4), 2);
    }
}

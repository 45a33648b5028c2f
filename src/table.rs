use crate::{
    bucket::{upsert, Bucket},
    entry::Entry,
    error::{Error, Result},
    hash_function::{HashFunction, StdHash},
    policy::ResizePolicy,
};
use std::{
    fmt::{self, Debug, Formatter},
    slice,
    sync::Arc,
};

/// Persistent hash table.
///
/// Every method leaves the original table untouched and returns a new one if
/// necessary. Snapshots share every bucket that an update does not touch, so
/// an insertion or removal copies a single bucket plus the array of bucket
/// references.
///
/// Removal moves the last entry of a bucket into the removed entry's position.
/// Iteration order is slot order and then bucket order, so it can change after
/// a removal and must not be relied upon.
pub struct Table<K, V, H = StdHash> {
    entry_count: usize,
    buckets: Arc<[Bucket<K, V>]>,
    hasher: Arc<H>,
    policy: ResizePolicy,
}

impl<K, V, H> Table<K, V, H> {
    /// Creates an empty table with the default resize policy.
    pub fn new(bucket_count: usize, hasher: H) -> Result<Self> {
        Self::with_policy(bucket_count, hasher, ResizePolicy::default())
    }

    /// Creates an empty table resized according to a policy.
    pub fn with_policy(bucket_count: usize, hasher: H, policy: ResizePolicy) -> Result<Self> {
        if bucket_count < 1 {
            return Err(Error::InvalidBucketCount(bucket_count));
        }

        // Empty buckets are never written to, so all slots can share one.
        let bucket = Bucket::default();

        Ok(Self {
            entry_count: 0,
            buckets: (0..bucket_count).map(|_| bucket.clone()).collect(),
            hasher: hasher.into(),
            policy,
        })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entry_count
    }

    /// Returns true if a table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.entry_count as f64 / self.bucket_count() as f64
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Returns key-value pairs in slot order and then bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            entries: Default::default(),
        }
    }

    /// Returns keys in the same order as [`Table::iter`].
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    fn with_bucket(&self, index: usize, bucket: Bucket<K, V>, entry_count: usize) -> Self {
        let mut buckets = self.buckets.to_vec();

        buckets[index] = bucket;

        Self {
            entry_count,
            buckets: buckets.into(),
            hasher: self.hasher.clone(),
            policy: self.policy,
        }
    }
}

impl<K, V, H: HashFunction<K>> Table<K, V, H> {
    fn slot(&self, key: &K) -> Result<usize> {
        self.slot_in(key, self.bucket_count())
    }

    fn slot_in(&self, key: &K, modulus: usize) -> Result<usize> {
        let index = <H as HashFunction<K>>::hash(&*self.hasher, key, modulus);

        if index < modulus {
            Ok(index)
        } else {
            Err(Error::HashOutOfRange { index, modulus })
        }
    }
}

impl<K: PartialEq, V, H: HashFunction<K>> Table<K, V, H> {
    /// Finds a value corresponding to a key.
    pub fn try_get(&self, key: &K) -> Result<Option<&V>> {
        Ok(self.buckets[self.slot(key)?].find(key))
    }

    /// Finds a value corresponding to a key.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index out of range.
    pub fn get(&self, key: &K) -> Option<&V> {
        fail_fast(self.try_get(key))
    }

    /// Returns true if a key is in a table.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index out of range.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Clone + PartialEq, V: Clone, H: HashFunction<K>> Table<K, V, H> {
    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// The new table grows if its load factor exceeds the grow threshold.
    #[must_use = "insertion does not modify the original table"]
    pub fn try_insert(&self, key: K, value: V) -> Result<Self> {
        let index = self.slot(&key)?;
        let (bucket, added) = self.buckets[index].insert(key, value);
        let table = self.with_bucket(index, bucket, self.entry_count + added as usize);

        if self.policy.should_grow(table.load_factor()) {
            table.resize(self.policy.grown(table.bucket_count()))
        } else {
            Ok(table)
        }
    }

    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index out of range.
    #[must_use = "insertion does not modify the original table"]
    pub fn insert(&self, key: K, value: V) -> Self {
        fail_fast(self.try_insert(key, value))
    }

    /// Removes a key.
    ///
    /// A table without the key is returned as it is. Otherwise, the new table
    /// shrinks if its load factor falls below the shrink threshold.
    #[must_use = "removal does not modify the original table"]
    pub fn try_remove(&self, key: &K) -> Result<Self> {
        let index = self.slot(key)?;

        let Some(bucket) = self.buckets[index].remove(key) else {
            return Ok(self.clone());
        };

        let table = self.with_bucket(index, bucket, self.entry_count - 1);
        let bucket_count = self.policy.shrunk(table.bucket_count());

        if self.policy.should_shrink(table.load_factor()) && bucket_count != table.bucket_count()
        {
            table.resize(bucket_count)
        } else {
            Ok(table)
        }
    }

    /// Removes a key.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index out of range.
    #[must_use = "removal does not modify the original table"]
    pub fn remove(&self, key: &K) -> Self {
        fail_fast(self.try_remove(key))
    }

    /// Rehashes all entries into a table with a different bucket count.
    ///
    /// The new table shares no bucket with the original one and is not
    /// resized again regardless of its load factor.
    #[must_use = "resizing does not modify the original table"]
    pub fn resize(&self, bucket_count: usize) -> Result<Self> {
        if bucket_count < 1 {
            return Err(Error::InvalidBucketCount(bucket_count));
        }

        let mut slots = (0..bucket_count).map(|_| Vec::new()).collect::<Vec<_>>();
        let mut entry_count = 0;

        for (key, value) in self {
            let index = self.slot_in(key, bucket_count)?;

            entry_count += upsert(&mut slots[index], key.clone(), value.clone()) as usize;
        }

        Ok(Self {
            entry_count,
            buckets: slots.into_iter().map(Bucket::from).collect(),
            hasher: self.hasher.clone(),
            policy: self.policy,
        })
    }

    /// Extends a table with key-value pairs.
    ///
    /// # Panics
    ///
    /// Panics if the hash function returns an index out of range.
    #[must_use = "extension does not modify the original table"]
    pub fn extend(&self, iterator: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut table = self.clone();

        for (key, value) in iterator {
            table = table.insert(key, value);
        }

        table
    }
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            entry_count: 0,
            buckets: vec![Bucket::default()].into(),
            hasher: StdHash.into(),
            policy: ResizePolicy::default(),
        }
    }
}

impl<K, V, H> Clone for Table<K, V, H> {
    fn clone(&self) -> Self {
        Self {
            entry_count: self.entry_count,
            buckets: self.buckets.clone(),
            hasher: self.hasher.clone(),
            policy: self.policy,
        }
    }
}

impl<K: Debug, V: Debug, H> Debug for Table<K, V, H> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter
            .debug_struct("Table")
            .field("entry_count", &self.entry_count)
            .field("bucket_count", &self.bucket_count())
            .field("load_factor", &self.load_factor())
            .field(
                "buckets",
                &self
                    .buckets
                    .iter()
                    .map(|bucket| {
                        bucket
                            .entries()
                            .iter()
                            .map(|entry| (entry.key(), entry.value()))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Tables are equal if they hold the same key-value pairs regardless of their
/// bucket counts or entry orders.
impl<K: PartialEq, V: PartialEq, H: HashFunction<K>> PartialEq for Table<K, V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.try_get(key).ok().flatten() == Some(value))
    }
}

impl<K: Eq, V: Eq, H: HashFunction<K>> Eq for Table<K, V, H> {}

#[derive(Debug)]
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Bucket<K, V>>,
    entries: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some((entry.key(), entry.value()));
            }

            self.entries = self.buckets.next()?.entries().iter();
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a Table<K, V, H> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn fail_fast<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|error| panic!("{error}"))
}

use crate::entry::Entry;
use std::sync::Arc;

/// Entries sharing one hash slot.
///
/// A bucket is never mutated once it is attached to a table. Updates copy the
/// entries into a fresh vector and wrap it in a new bucket, so any number of
/// snapshots can hold the same bucket.
#[derive(Debug, Eq, PartialEq)]
pub struct Bucket<K, V>(Arc<Vec<Entry<K, V>>>);

impl<K, V> Clone for Bucket<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Default for Bucket<K, V> {
    fn default() -> Self {
        Self(Arc::new(Vec::new()))
    }
}

impl<K, V> From<Vec<Entry<K, V>>> for Bucket<K, V> {
    fn from(entries: Vec<Entry<K, V>>) -> Self {
        Self(Arc::new(entries))
    }
}

impl<K, V> Bucket<K, V> {
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.0
    }

    /// Returns true if both buckets are the same allocation.
    #[cfg(test)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<K: PartialEq, V> Bucket<K, V> {
    fn find_index(&self, key: &K) -> Option<usize> {
        self.0.iter().position(|entry| entry.key() == key)
    }

    pub fn find(&self, key: &K) -> Option<&V> {
        self.find_index(key).map(|index| self.0[index].value())
    }
}

impl<K: Clone + PartialEq, V: Clone> Bucket<K, V> {
    /// Returns a new bucket with the key bound to the value and whether the
    /// key was absent before.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> (Self, bool) {
        let mut entries = (*self.0).clone();
        let added = upsert(&mut entries, key, value);

        (entries.into(), added)
    }

    /// Returns a new bucket without the key, or `None` if the key is absent.
    ///
    /// The last entry is moved into the removed position, so removal does not
    /// preserve insertion order.
    #[must_use]
    pub fn remove(&self, key: &K) -> Option<Self> {
        self.find_index(key).map(|index| {
            let mut entries = (*self.0).clone();
            entries.swap_remove(index);
            entries.into()
        })
    }
}

/// Overwrites the value of an existing key or appends a new entry. Returns
/// true if an entry was appended.
pub fn upsert<K: PartialEq, V>(entries: &mut Vec<Entry<K, V>>, key: K, value: V) -> bool {
    match entries.iter_mut().find(|entry| *entry.key() == key) {
        Some(entry) => {
            entry.replace_value(value);
            false
        }
        None => {
            entries.push(Entry::new(key, value));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<K: Clone, V>(bucket: &Bucket<K, V>) -> Vec<K> {
        bucket.entries().iter().map(|entry| entry.key().clone()).collect()
    }

    #[test]
    fn new() {
        assert!(Bucket::<usize, usize>::default().entries().is_empty());
    }

    #[test]
    fn insert() {
        let bucket = Bucket::default();
        let (other, added) = bucket.insert(42, 0);

        assert!(added);
        assert_eq!(bucket.entries().len(), 0);
        assert_eq!(other.entries().len(), 1);

        let (another, added) = other.insert(0, 0);

        assert!(added);
        assert_eq!(other.entries().len(), 1);
        assert_eq!(another.entries().len(), 2);
    }

    #[test]
    fn insert_existing_key() {
        let (bucket, _) = Bucket::default().insert(42, 0);
        let (other, added) = bucket.insert(42, 1);

        assert!(!added);
        assert_eq!(other.entries().len(), 1);
        assert_eq!(bucket.find(&42), Some(&0));
        assert_eq!(other.find(&42), Some(&1));
    }

    #[test]
    fn insert_allocates_new_bucket() {
        let (bucket, _) = Bucket::default().insert(42, 0);
        let (other, _) = bucket.insert(42, 0);

        assert_eq!(bucket, other);
        assert!(!bucket.ptr_eq(&other));
    }

    #[test]
    fn remove() {
        let (bucket, _) = Bucket::default().insert(42, 0);

        assert!(bucket.remove(&42).unwrap().entries().is_empty());
        assert_eq!(bucket.remove(&0), None);
        assert_eq!(bucket.entries().len(), 1);
    }

    #[test]
    fn remove_swaps_last_entry_in() {
        let mut bucket = Bucket::default();

        for key in 0..4 {
            bucket = bucket.insert(key, key).0;
        }

        let other = bucket.remove(&0).unwrap();

        assert_eq!(keys(&bucket), vec![0, 1, 2, 3]);
        assert_eq!(keys(&other), vec![3, 1, 2]);
        assert_eq!(keys(&other.remove(&3).unwrap()), vec![2, 1]);
        assert_eq!(keys(&other.remove(&2).unwrap()), vec![3, 1]);
    }

    #[test]
    fn find() {
        let (bucket, _) = Bucket::default().insert(42, 0);

        assert_eq!(bucket.find(&42), Some(&0));
        assert_eq!(bucket.find(&0), None);
    }

    #[test]
    fn ptr_eq() {
        let bucket = Bucket::<usize, usize>::default();

        assert!(bucket.ptr_eq(&bucket.clone()));
        assert!(!bucket.ptr_eq(&Bucket::default()));
    }

    #[test]
    fn upsert_into_vec() {
        let mut entries = Vec::new();

        assert!(upsert(&mut entries, "tom", 1));
        assert!(upsert(&mut entries, "dick", 2));
        assert!(!upsert(&mut entries, "tom", 3));
        assert_eq!(entries, vec![Entry::new("tom", 3), Entry::new("dick", 2)]);
    }
}

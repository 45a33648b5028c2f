use std::mem::replace;

/// Key-value pair stored in a bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value and returns the previous one.
    pub fn replace_value(&mut self, value: V) -> V {
        replace(&mut self.value, value)
    }
}

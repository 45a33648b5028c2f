//! Persistent hash table whose snapshots share buckets.
//!
//! A [`Table`] is a chained hash table that never changes once created.
//! Insertion and removal return a new table which copies only the bucket
//! being updated and shares every other bucket with the original one, so old
//! snapshots stay valid and cheap to keep around. Tables grow and shrink
//! automatically when their load factor crosses the thresholds of their
//! [`ResizePolicy`].
//!
//! Bucket indices come from a caller-supplied [`HashFunction`], which can be
//! any closure of type `Fn(&K, usize) -> usize` returning an index below the
//! given modulus.
//!
//! ```
//! use cow_hash_table::{SumHash, Table};
//!
//! let table = Table::new(1, SumHash)?;
//! let other = table.insert("tom", 1).insert("dick", 2);
//!
//! assert_eq!(table.get(&"tom"), None);
//! assert_eq!(other.get(&"tom"), Some(&1));
//! assert_eq!(other.remove(&"tom").len(), 1);
//! # Ok::<(), cow_hash_table::Error>(())
//! ```

mod bucket;
mod entry;
mod error;
mod hash_function;
mod policy;
mod table;

pub use error::{Error, Result};
pub use hash_function::{HashFunction, StdHash, SumHash};
pub use policy::ResizePolicy;
pub use table::{Iter, Table};

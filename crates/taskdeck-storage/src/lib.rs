//! # taskdeck-storage
//!
//! Storage abstraction layer for taskdeck using RocksDB.
//!
//! Records are bincode-serialized and partitioned into column families,
//! one per record type plus one per secondary index. Multi-key writes go
//! through atomic write batches.

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StorageError};
pub use rocksdb_impl::RocksDbStorage;
pub use traits::{Batch, Storage};

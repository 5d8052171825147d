//! Storage trait definitions.

use crate::errors::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

/// Storage interface for key-value operations
///
/// Abstracts the underlying RocksDB instance so services can be tested
/// against temporary databases and stay generic over the backend.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get a value by key from a column family
    ///
    /// Returns `Ok(Some(value))` if the key exists, `Ok(None)` otherwise.
    async fn get<K, V>(&self, cf: &str, key: &K) -> Result<Option<V>>
    where
        K: Serialize + Send + Sync,
        V: DeserializeOwned;

    /// Put a key-value pair into a column family
    async fn put<K, V>(&self, cf: &str, key: &K, value: &V) -> Result<()>
    where
        K: Serialize + Send + Sync,
        V: Serialize + Send + Sync;

    /// Delete a key from a column family
    async fn delete<K>(&self, cf: &str, key: &K) -> Result<()>
    where
        K: Serialize + Send + Sync;

    /// Check if a key exists in a column family
    async fn exists<K>(&self, cf: &str, key: &K) -> Result<bool>
    where
        K: Serialize + Send + Sync;

    /// Scan a column family for all entries whose key starts with `prefix`
    ///
    /// Returns the raw key bytes alongside each decoded value; callers
    /// decode composite keys themselves.
    async fn get_by_prefix<K, V>(&self, cf: &str, prefix: &K) -> Result<Vec<(Vec<u8>, V)>>
    where
        K: Serialize + Send + Sync,
        V: DeserializeOwned;

    /// Apply a batch of writes atomically
    ///
    /// Either every operation in the batch lands or none do.
    async fn write(&self, batch: Batch) -> Result<()>;
}

/// A single buffered batch operation
pub(crate) enum BatchOp {
    Put {
        cf: &'static str,
        key: Vec<u8>,
        value: Vec<u8>,
    },
    Delete {
        cf: &'static str,
        key: Vec<u8>,
    },
}

/// Builder for atomic multi-key writes
///
/// Keys and values are serialized as they are added, so a serialization
/// failure surfaces before anything touches the database.
#[derive(Default)]
pub struct Batch {
    pub(crate) ops: Vec<BatchOp>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a put into `cf`
    pub fn put<K, V>(&mut self, cf: &'static str, key: &K, value: &V) -> Result<()>
    where
        K: Serialize,
        V: Serialize,
    {
        self.ops.push(BatchOp::Put {
            cf,
            key: serialize_key(key)?,
            value: serialize_value(value)?,
        });
        Ok(())
    }

    /// Buffer a delete from `cf`
    pub fn delete<K>(&mut self, cf: &'static str, key: &K) -> Result<()>
    where
        K: Serialize,
    {
        self.ops.push(BatchOp::Delete {
            cf,
            key: serialize_key(key)?,
        });
        Ok(())
    }

    /// Number of buffered operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

pub(crate) fn serialize_key<K: Serialize>(key: &K) -> Result<Vec<u8>> {
    bincode::serialize(key).map_err(|e| crate::errors::StorageError::Serialization(e.to_string()))
}

pub(crate) fn serialize_value<V: Serialize>(value: &V) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| crate::errors::StorageError::Serialization(e.to_string()))
}

pub(crate) fn deserialize_value<V: DeserializeOwned>(bytes: &[u8]) -> Result<V> {
    bincode::deserialize(bytes)
        .map_err(|e| crate::errors::StorageError::Deserialization(e.to_string()))
}

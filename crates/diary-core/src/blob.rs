use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("blob store unavailable: {0}")]
    Unavailable(String),
}

/// Content-addressed blob store boundary. `put` of identical bytes returns
/// the same address; addresses returned by `put` resolve with `get` for as
/// long as the backing store keeps them.
pub trait BlobStore {
    fn put(&self, bytes: &[u8], name_hint: &str) -> Result<String, BlobError>;

    fn get(&self, address: &str) -> Result<Vec<u8>, BlobError>;

    fn size(&self, address: &str) -> Result<u64, BlobError>;
}

impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    fn put(&self, bytes: &[u8], name_hint: &str) -> Result<String, BlobError> {
        (**self).put(bytes, name_hint)
    }

    fn get(&self, address: &str) -> Result<Vec<u8>, BlobError> {
        (**self).get(address)
    }

    fn size(&self, address: &str) -> Result<u64, BlobError> {
        (**self).size(address)
    }
}

/// In-memory store with sha256-derived addresses, for local runs, indexer
/// replays, and tests.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address_of(bytes: &[u8]) -> String {
        format!("baf{}", hex::encode(Sha256::digest(bytes)))
    }
}

impl BlobStore for MemoryBlobStore {
    fn put(&self, bytes: &[u8], _name_hint: &str) -> Result<String, BlobError> {
        let address = Self::address_of(bytes);

        self.blobs.write().insert(address.clone(), bytes.to_vec());

        Ok(address)
    }

    fn get(&self, address: &str) -> Result<Vec<u8>, BlobError> {
        self.blobs
            .read()
            .get(address)
            .cloned()
            .ok_or_else(|| BlobError::NotFound(address.to_string()))
    }

    fn size(&self, address: &str) -> Result<u64, BlobError> {
        self.blobs
            .read()
            .get(address)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| BlobError::NotFound(address.to_string()))
    }
}

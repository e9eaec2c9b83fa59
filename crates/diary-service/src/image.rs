use diary_core::BlobStore;
use tracing::debug;

use crate::{error::Error, ledger::DiaryLedger};

/// Client-side image shrinking before the bytes go to the store. The
/// default pipeline passes bytes through untouched.
pub trait ImageCompressor {
    fn compress(&self, bytes: &[u8]) -> Vec<u8>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCompressor;

impl ImageCompressor for NoopCompressor {
    fn compress(&self, bytes: &[u8]) -> Vec<u8> {
        bytes.to_vec()
    }
}

/// Image upload path: quota gate, compress, store, then charge the
/// on-chain counter.
pub struct ImageService<L, S, C = NoopCompressor> {
    ledger: L,
    store: S,
    compressor: C,
}

impl<L: DiaryLedger, S: BlobStore> ImageService<L, S> {
    pub fn new(ledger: L, store: S) -> Self {
        Self {
            ledger,
            store,
            compressor: NoopCompressor,
        }
    }
}

impl<L: DiaryLedger, S: BlobStore, C: ImageCompressor> ImageService<L, S, C> {
    pub fn with_compressor(ledger: L, store: S, compressor: C) -> Self {
        Self {
            ledger,
            store,
            compressor,
        }
    }

    /// The quota gate runs before any byte is written, so a rejected
    /// upload leaves no orphan blob behind.
    pub fn upload(&self, user: &str, image: &[u8]) -> Result<String, Error> {
        if image.is_empty() {
            return Err(Error::Validation { field: "image" });
        }

        if !self.ledger.can_upload_image(user)? {
            return Err(Error::QuotaExceeded);
        }

        let compressed = self.compressor.compress(image);
        let cid = self.store.put(&compressed, "diary-image")?;
        let count = self.ledger.increment_image_upload(user)?;

        debug!(user, %cid, count, "image uploaded");

        Ok(cid)
    }
}

use diary_core::BlobError;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Service failure taxonomy. Validation and quota problems belong to the
/// caller; blob trouble is absorbed where the read path can degrade; chain
/// trouble surfaces with detail and no automatic retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("unauthorized")]
    Unauthorized,

    #[error("Free image limit reached. Upgrade to premium for unlimited uploads.")]
    QuotaExceeded,

    #[error("blob store operation failed")]
    BlobFetch(#[from] BlobError),

    #[error("volume encoding failed")]
    Encoding(#[from] serde_json::Error),

    #[error("chain call failed")]
    ChainCall(#[source] LedgerError),
}

// Auth rejections surface as `Unauthorized`; every other ledger failure
// stays a `ChainCall`.
impl From<LedgerError> for Error {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unauthorized => Error::Unauthorized,
            other => Error::ChainCall(other),
        }
    }
}

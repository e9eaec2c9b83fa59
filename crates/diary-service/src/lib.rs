//! Service-layer glue between clients, the blob store, and the on-chain
//! ledger: the append-log write path, the image quota gate, and the user
//! status aggregation. HTTP routing lives elsewhere; these services are
//! what the handlers call.

pub mod entry;
pub mod error;
pub mod fetch;
pub mod image;
pub mod ledger;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use entry::{EntryReceipt, EntryService, NewEntry};
pub use error::Error;
pub use fetch::FetchPolicy;
pub use image::{ImageCompressor, ImageService, NoopCompressor};
pub use ledger::{DiaryLedger, LedgerError, LedgerStatus, VolumePointer};
pub use status::{StatusService, UserStatusReport};

//! Shared vocabulary for the diary's off-chain read and write paths.
//!
//! Everything the service layer and the indexer must agree on lives here:
//! the volume JSON documents, UTC calendar-day handling, the streak walk,
//! and the blob-store boundary.

pub mod blob;
pub mod dates;
pub mod streak;
pub mod volume;

pub use blob::{BlobError, BlobStore, MemoryBlobStore};
pub use volume::{DiaryEntry, VolumeDoc, MAX_VOLUME_BYTES};

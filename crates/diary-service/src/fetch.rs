use diary_core::{BlobError, BlobStore};
use tracing::warn;

/// Retry budget for blob reads. Timeouts are the store implementation's
/// concern; this only decides how many attempts a read gets before the
/// caller's failure policy takes over.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicy {
    pub retries: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self { retries: 1 }
    }
}

pub fn fetch_with_policy(
    store: &dyn BlobStore,
    address: &str,
    policy: FetchPolicy,
) -> Result<Vec<u8>, BlobError> {
    let mut attempt = 0;

    loop {
        match store.get(address) {
            Ok(bytes) => return Ok(bytes),
            Err(err) if attempt < policy.retries => {
                warn!(address, attempt, error = %err, "blob fetch failed, retrying");
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

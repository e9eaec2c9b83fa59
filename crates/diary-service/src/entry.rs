use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use diary_core::{BlobStore, VolumeDoc, MAX_VOLUME_BYTES};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    error::Error,
    fetch::{fetch_with_policy, FetchPolicy},
    ledger::DiaryLedger,
};

/// One diary post as submitted by the client.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub text: String,
    pub image_cids: Vec<String>,
}

/// Where an append landed. `entry_cid` addresses the volume document the
/// entry now lives in; `new_volume` is true whenever the write started a
/// fresh volume, including the fetch-failure rollover case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryReceipt {
    #[serde(rename = "entryCID")]
    pub entry_cid: String,
    pub entry_id: u32,
    pub volume_id: u64,
    pub new_volume: bool,
}

/// The append-log write path.
///
/// The whole read-append-publish sequence runs under a per-user advisory
/// lock, so writers inside one process cannot lose updates to each other.
/// The on-chain pointer write stays a single operation; writers in other
/// processes still race last-writer-wins on it.
pub struct EntryService<L, S> {
    ledger: L,
    store: S,
    policy: FetchPolicy,
    max_volume_bytes: usize,
    // advisory section per user; the guarded value is the last volume id
    // issued here, which keeps fresh ids strictly increasing even when the
    // clock stalls
    users: Mutex<HashMap<String, Arc<Mutex<u64>>>>,
}

impl<L: DiaryLedger, S: BlobStore> EntryService<L, S> {
    pub fn new(ledger: L, store: S) -> Self {
        Self {
            ledger,
            store,
            policy: FetchPolicy::default(),
            max_volume_bytes: MAX_VOLUME_BYTES,
            users: Mutex::new(HashMap::new()),
        }
    }

    pub fn create_entry(
        &self,
        user: &str,
        entry: NewEntry,
        now: DateTime<Utc>,
    ) -> Result<EntryReceipt, Error> {
        if entry.text.is_empty() {
            return Err(Error::Validation { field: "text" });
        }

        let slot = self.user_slot(user);
        let mut last_volume_id = slot.lock();

        let current = self.resolve_current_volume(user)?;
        let new_volume = current.is_none();

        let mut doc = match current {
            Some(doc) => doc,
            None => VolumeDoc::new(next_volume_id(now, *last_volume_id)),
        };

        // remember the highest id seen so a later rollover cannot reuse it
        *last_volume_id = (*last_volume_id).max(doc.volume_id);

        let entry_id = doc.append(now, entry.text, entry.image_cids);
        let volume_id = doc.volume_id;

        let bytes = doc.to_bytes()?;
        let name_hint = format!("diary-volume-{volume_id}");
        let entry_cid = self.store.put(&bytes, &name_hint)?;

        self.ledger.update_diary(user, &entry_cid)?;

        debug!(user, entry_id, volume_id, new_volume, "entry appended");

        Ok(EntryReceipt {
            entry_cid,
            entry_id,
            volume_id,
            new_volume,
        })
    }

    fn user_slot(&self, user: &str) -> Arc<Mutex<u64>> {
        self.users
            .lock()
            .entry(user.to_string())
            .or_default()
            .clone()
    }

    /// The fetch-failure branch deliberately matches the size-rollover
    /// branch: an unreachable current volume orphans its entries and a
    /// fresh volume begins. Callers see it through `new_volume`.
    fn resolve_current_volume(&self, user: &str) -> Result<Option<VolumeDoc>, Error> {
        let Some(cid) = self.ledger.latest_cid(user)? else {
            return Ok(None);
        };

        let bytes = match fetch_with_policy(&self.store, &cid, self.policy) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(user, %cid, error = %err, "current volume unreachable, starting a new one");
                return Ok(None);
            }
        };

        if bytes.len() >= self.max_volume_bytes {
            debug!(user, %cid, size = bytes.len(), "volume at size threshold, rolling over");
            return Ok(None);
        }

        match VolumeDoc::from_bytes(&bytes) {
            Ok(doc) => Ok(Some(doc)),
            Err(err) => {
                warn!(user, %cid, error = %err, "current volume undecodable, starting a new one");
                Ok(None)
            }
        }
    }
}

fn next_volume_id(now: DateTime<Utc>, last: u64) -> u64 {
    let candidate = diary_core::dates::unix_millis(now);

    // strictly increasing per user, even if the clock returns the same
    // millisecond twice
    candidate.max(last + 1)
}

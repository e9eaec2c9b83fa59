use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use diary_core::{dates, streak, BlobStore, VolumeDoc};
use serde::Serialize;
use tracing::warn;

use crate::{
    error::Error,
    fetch::{fetch_with_policy, FetchPolicy},
    ledger::{DiaryLedger, VolumePointer},
};

/// Everything a profile screen needs in one call, shaped for the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusReport {
    pub address: String,
    pub premium: bool,
    pub free_image_uploads_used: u32,
    pub volumes: Vec<VolumePointer>,
    pub last_reward_timestamp: u64,
    pub streak: u32,
    pub next_reward_available_at: u64,
}

/// Read-side aggregator over the chain record and the volume documents.
pub struct StatusService<L, S> {
    ledger: L,
    store: S,
    policy: FetchPolicy,
}

impl<L: DiaryLedger, S: BlobStore> StatusService<L, S> {
    pub fn new(ledger: L, store: S) -> Self {
        Self {
            ledger,
            store,
            policy: FetchPolicy::default(),
        }
    }

    /// Chain reads here are authoritative and fail the call; volume
    /// fetches are best-effort, so a missing document shortens the
    /// reported streak instead of erroring.
    pub fn user_status(&self, user: &str, now: DateTime<Utc>) -> Result<UserStatusReport, Error> {
        let status = self.ledger.user_status(user)?;
        let pointers = self.ledger.user_volumes(user)?;

        let mut entry_days = BTreeSet::new();

        for pointer in &pointers {
            let bytes = match fetch_with_policy(&self.store, &pointer.cid, self.policy) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(user, cid = %pointer.cid, error = %err, "volume unreachable, streak may undercount");
                    continue;
                }
            };

            match VolumeDoc::from_bytes(&bytes) {
                Ok(doc) => entry_days.extend(doc.entry_dates()),
                Err(err) => {
                    warn!(user, cid = %pointer.cid, error = %err, "volume undecodable, streak may undercount");
                }
            }
        }

        let streak = streak::consecutive_days(&entry_days, now.date_naive());
        let next_reward_available_at = dates::unix_millis(now) + status.next_reward_in * 1000;

        Ok(UserStatusReport {
            address: user.to_string(),
            premium: status.premium,
            free_image_uploads_used: status.images_used,
            volumes: pointers,
            last_reward_timestamp: status.last_reward,
            streak,
            next_reward_available_at,
        })
    }
}

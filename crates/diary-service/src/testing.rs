//! Shared doubles for the unit tests in this crate: an in-memory ledger
//! that mirrors the contract's reward and quota rules, and a blob store
//! wrapper that injects fetch outages on demand.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use diary_core::{BlobError, BlobStore, MemoryBlobStore};
use parking_lot::Mutex;

use crate::ledger::{DiaryLedger, LedgerError, LedgerStatus, VolumePointer};

const ONE_DAY: u64 = 86_400;
const MAX_FREE_IMAGES: u32 = 5;

pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

#[derive(Default, Clone)]
struct FakeUser {
    premium: bool,
    images_used: u32,
    last_reward: u64,
    rewards_issued: u32,
    volumes: Vec<VolumePointer>,
}

/// Ledger double with the same observable rules as the contract: empty
/// pointers rejected, one reward per rolling day, five free image slots,
/// premium counters frozen.
pub struct FakeLedger {
    users: Mutex<HashMap<String, FakeUser>>,
    now: Mutex<u64>,
    auth_denied: Mutex<bool>,
}

impl Default for FakeLedger {
    fn default() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            // noon(2024, 1, 10), so last_reward 0 keeps meaning "never"
            now: Mutex::new(1_704_888_000),
            auth_denied: Mutex::new(false),
        }
    }
}

impl FakeLedger {
    pub fn now(&self) -> u64 {
        *self.now.lock()
    }

    pub fn set_now(&self, now: u64) {
        *self.now.lock() = now;
    }

    pub fn advance(&self, seconds: u64) {
        *self.now.lock() += seconds;
    }

    pub fn rewards_issued(&self, user: &str) -> u32 {
        self.users
            .lock()
            .get(user)
            .map(|record| record.rewards_issued)
            .unwrap_or(0)
    }

    pub fn images_used(&self, user: &str) -> u32 {
        self.users
            .lock()
            .get(user)
            .map(|record| record.images_used)
            .unwrap_or(0)
    }

    /// Makes every auth-gated call fail, as if the submitted transaction
    /// carried the wrong signature.
    pub fn deny_auth(&self) {
        *self.auth_denied.lock() = true;
    }

    fn check_auth(&self) -> Result<(), LedgerError> {
        if *self.auth_denied.lock() {
            return Err(LedgerError::Unauthorized);
        }

        Ok(())
    }

    /// Seeds a pointer without touching reward state.
    pub fn push_pointer(&self, user: &str, cid: &str, timestamp: u64) {
        self.users
            .lock()
            .entry(user.to_string())
            .or_default()
            .volumes
            .push(VolumePointer {
                cid: cid.to_string(),
                timestamp,
            });
    }
}

impl DiaryLedger for FakeLedger {
    fn update_diary(&self, user: &str, cid: &str) -> Result<(), LedgerError> {
        self.check_auth()?;

        if cid.is_empty() {
            return Err(LedgerError::Rejected("cid must not be empty".into()));
        }

        let now = self.now();
        let mut users = self.users.lock();
        let record = users.entry(user.to_string()).or_default();

        record.volumes.push(VolumePointer {
            cid: cid.to_string(),
            timestamp: now,
        });

        if record.last_reward == 0 || now - record.last_reward >= ONE_DAY {
            record.last_reward = now;
            record.rewards_issued += 1;
        }

        Ok(())
    }

    fn increment_image_upload(&self, user: &str) -> Result<u32, LedgerError> {
        self.check_auth()?;

        let mut users = self.users.lock();
        let record = users.entry(user.to_string()).or_default();

        if record.premium {
            return Ok(record.images_used);
        }

        if record.images_used >= MAX_FREE_IMAGES {
            return Err(LedgerError::Rejected("free image quota exhausted".into()));
        }

        record.images_used += 1;

        Ok(record.images_used)
    }

    fn set_premium(&self, user: &str, premium: bool) -> Result<(), LedgerError> {
        self.check_auth()?;

        self.users
            .lock()
            .entry(user.to_string())
            .or_default()
            .premium = premium;

        Ok(())
    }

    fn latest_cid(&self, user: &str) -> Result<Option<String>, LedgerError> {
        Ok(self
            .users
            .lock()
            .get(user)
            .and_then(|record| record.volumes.last())
            .map(|pointer| pointer.cid.clone()))
    }

    fn user_volumes(&self, user: &str) -> Result<Vec<VolumePointer>, LedgerError> {
        Ok(self
            .users
            .lock()
            .get(user)
            .map(|record| record.volumes.clone())
            .unwrap_or_default())
    }

    fn user_status(&self, user: &str) -> Result<LedgerStatus, LedgerError> {
        let now = self.now();
        let users = self.users.lock();
        let record = users.get(user).cloned().unwrap_or_default();

        let next_reward_in = if record.last_reward == 0 || now - record.last_reward >= ONE_DAY {
            0
        } else {
            ONE_DAY - (now - record.last_reward)
        };

        Ok(LedgerStatus {
            premium: record.premium,
            images_used: record.images_used,
            volume_count: record.volumes.len() as u32,
            last_reward: record.last_reward,
            next_reward_in,
        })
    }

    fn can_upload_image(&self, user: &str) -> Result<bool, LedgerError> {
        let users = self.users.lock();
        let record = users.get(user).cloned().unwrap_or_default();

        Ok(record.premium || record.images_used < MAX_FREE_IMAGES)
    }
}

/// Blob store that serves from memory but fails the next N `get` calls
/// when armed, for exercising retry and rollover paths.
pub struct FlakyStore {
    inner: MemoryBlobStore,
    failures: Mutex<u32>,
}

impl FlakyStore {
    pub fn new(inner: MemoryBlobStore) -> Self {
        Self {
            inner,
            failures: Mutex::new(0),
        }
    }

    pub fn fail_next_gets(&self, count: u32) {
        *self.failures.lock() = count;
    }
}

impl BlobStore for FlakyStore {
    fn put(&self, bytes: &[u8], name_hint: &str) -> Result<String, BlobError> {
        self.inner.put(bytes, name_hint)
    }

    fn get(&self, address: &str) -> Result<Vec<u8>, BlobError> {
        {
            let mut failures = self.failures.lock();

            if *failures > 0 {
                *failures -= 1;
                return Err(BlobError::Unavailable("injected outage".into()));
            }
        }

        self.inner.get(address)
    }

    fn size(&self, address: &str) -> Result<u64, BlobError> {
        self.inner.size(address)
    }
}

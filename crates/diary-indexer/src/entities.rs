//! The mirrored entity graph. Every field here is rebuilt purely from
//! the event stream plus the blob store; nothing is read back from the
//! chain directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub address: String,
    pub premium: bool,
    pub last_reward_timestamp: u64,
    pub total_volumes: u32,
    pub total_entries: u32,
    /// Consecutive entry days ending on the day of the latest update.
    pub streak: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

impl User {
    pub(crate) fn fresh(address: &str, timestamp: u64) -> Self {
        Self {
            address: address.to_string(),
            premium: false,
            last_reward_timestamp: 0,
            total_volumes: 0,
            total_entries: 0,
            streak: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub user: String,
    pub volume_id: u64,
    pub cid: String,
    /// Ledger time of the latest pointer update naming this volume.
    pub timestamp: u64,
    pub entry_count: u32,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub user: String,
    pub volume_id: u64,
    pub entry_id: u32,
    pub date: DateTime<Utc>,
    pub text: String,
    #[serde(rename = "imageCIDs")]
    pub image_cids: Vec<String>,
}

impl Entry {
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub user: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumStatusChange {
    pub id: String,
    pub user: String,
    pub premium: bool,
    pub timestamp: u64,
}

/// Whole-deployment counters, one row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_users: u32,
    pub total_volumes: u32,
    pub total_entries: u64,
    pub total_rewards: u64,
    pub premium_users: u32,
    pub updated_at: u64,
}

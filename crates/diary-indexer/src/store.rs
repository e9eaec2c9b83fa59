use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::entities::{Entry, GlobalStats, PremiumStatusChange, Reward, User, Volume};

/// The rebuilt graph. Ordered maps keep iteration stable, so two replays
/// of the same stream over the same blobs compare equal with `==`.
#[derive(Debug, Default, PartialEq)]
pub struct EntityStore {
    pub users: BTreeMap<String, User>,
    /// Keyed by `(user, volume_id)`.
    pub volumes: BTreeMap<(String, u64), Volume>,
    /// Keyed by `(user, volume_id, entry_id)`.
    pub entries: BTreeMap<(String, u64, u32), Entry>,
    /// Keyed by stream-position id.
    pub rewards: BTreeMap<String, Reward>,
    /// Keyed by stream-position id.
    pub premium_changes: BTreeMap<String, PremiumStatusChange>,
    pub stats: GlobalStats,
}

impl EntityStore {
    pub fn user(&self, address: &str) -> Option<&User> {
        self.users.get(address)
    }

    pub fn volumes_of<'a>(&'a self, address: &str) -> impl Iterator<Item = &'a Volume> + 'a {
        let from = (address.to_string(), u64::MIN);
        let to = (address.to_string(), u64::MAX);

        self.volumes.range(from..=to).map(|(_, volume)| volume)
    }

    pub fn entries_of<'a>(&'a self, address: &str) -> impl Iterator<Item = &'a Entry> + 'a {
        let from = (address.to_string(), u64::MIN, u32::MIN);
        let to = (address.to_string(), u64::MAX, u32::MAX);

        self.entries.range(from..=to).map(|(_, entry)| entry)
    }

    /// Distinct entry days for one user, the streak calculator's input.
    pub fn user_entry_days(&self, address: &str) -> BTreeSet<NaiveDate> {
        self.entries_of(address).map(Entry::day).collect()
    }
}

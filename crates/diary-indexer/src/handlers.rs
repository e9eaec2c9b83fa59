use diary_core::{dates, streak, BlobStore, VolumeDoc};
use tracing::{debug, warn};

use crate::{
    entities::{Entry, PremiumStatusChange, Reward, User, Volume},
    events::{DiaryEvent, EventEnvelope},
    store::EntityStore,
};

/// Applies the event stream to the entity graph. Handlers never fail:
/// an unreachable or undecodable volume document is indexed as an empty
/// volume, the same degradation the read side applies to that outage.
pub struct Indexer<S> {
    store: S,
    entities: EntityStore,
}

impl<S: BlobStore> Indexer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            entities: EntityStore::default(),
        }
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn into_entities(self) -> EntityStore {
        self.entities
    }

    pub fn replay<'a>(&mut self, events: impl IntoIterator<Item = &'a EventEnvelope>) {
        for envelope in events {
            self.apply(envelope);
        }
    }

    pub fn apply(&mut self, envelope: &EventEnvelope) {
        match &envelope.event {
            DiaryEvent::DiaryUpdated {
                user,
                cid,
                timestamp,
            } => self.diary_updated(user, cid, *timestamp),
            DiaryEvent::RewardIssued { user, timestamp } => {
                self.reward_issued(envelope, user, *timestamp)
            }
            DiaryEvent::PremiumStatusChanged { user, premium } => {
                self.premium_status_changed(envelope, user, *premium)
            }
        }
    }

    fn diary_updated(&mut self, user: &str, cid: &str, timestamp: u64) {
        self.ensure_user(user, timestamp);

        let doc = match self.store.get(cid) {
            Ok(bytes) => match VolumeDoc::from_bytes(&bytes) {
                Ok(doc) => Some(doc),
                Err(err) => {
                    warn!(user, cid, error = %err, "volume document undecodable, indexing it empty");
                    None
                }
            },
            Err(err) => {
                warn!(user, cid, error = %err, "volume blob unreachable, indexing it empty");
                None
            }
        };

        // an unreadable document still gets a volume row; the seconds-scale
        // fallback id cannot collide with millisecond document ids
        let volume_id = doc.as_ref().map(|doc| doc.volume_id).unwrap_or(timestamp);
        let key = (user.to_string(), volume_id);

        let new_volume = !self.entities.volumes.contains_key(&key);

        if new_volume {
            let from = (user.to_string(), u64::MIN);
            let to = (user.to_string(), u64::MAX);

            for (_, volume) in self.entities.volumes.range_mut(from..=to) {
                volume.is_current = false;
            }

            self.entities.volumes.insert(
                key.clone(),
                Volume {
                    user: user.to_string(),
                    volume_id,
                    cid: cid.to_string(),
                    timestamp,
                    entry_count: 0,
                    is_current: true,
                },
            );
        }

        let mut new_entries: u32 = 0;

        if let Some(doc) = &doc {
            for (index, entry) in doc.entries.iter().enumerate() {
                let entry_key = (user.to_string(), volume_id, index as u32);

                if self.entities.entries.contains_key(&entry_key) {
                    continue;
                }

                self.entities.entries.insert(
                    entry_key,
                    Entry {
                        user: user.to_string(),
                        volume_id,
                        entry_id: index as u32,
                        date: entry.date,
                        text: entry.text.clone(),
                        image_cids: entry.image_cids.clone(),
                    },
                );

                new_entries += 1;
            }
        }

        if let Some(volume) = self.entities.volumes.get_mut(&key) {
            volume.cid = cid.to_string();
            volume.timestamp = timestamp;

            if let Some(doc) = &doc {
                volume.entry_count = doc.entries.len() as u32;
            }
        }

        let days = self.entities.user_entry_days(user);
        let streak = streak::consecutive_days(&days, dates::day_of_unix(timestamp));

        if let Some(record) = self.entities.users.get_mut(user) {
            if new_volume {
                record.total_volumes += 1;
            }

            record.total_entries += new_entries;
            record.streak = streak;
            record.updated_at = timestamp;
        }

        if new_volume {
            self.entities.stats.total_volumes += 1;
        }

        self.entities.stats.total_entries += u64::from(new_entries);
        self.entities.stats.updated_at = timestamp;

        debug!(user, volume_id, new_entries, streak, "diary update indexed");
    }

    fn reward_issued(&mut self, envelope: &EventEnvelope, user: &str, timestamp: u64) {
        self.ensure_user(user, timestamp);

        if let Some(record) = self.entities.users.get_mut(user) {
            record.last_reward_timestamp = timestamp;
            record.updated_at = timestamp;
        }

        let id = envelope.entity_id();
        let reward = Reward {
            id: id.clone(),
            user: user.to_string(),
            timestamp,
        };

        // at-least-once delivery; only the first copy counts
        if self.entities.rewards.insert(id, reward).is_none() {
            self.entities.stats.total_rewards += 1;
        }

        self.entities.stats.updated_at = timestamp;
    }

    fn premium_status_changed(&mut self, envelope: &EventEnvelope, user: &str, premium: bool) {
        let timestamp = envelope.ledger_timestamp;

        self.ensure_user(user, timestamp);

        let mut turned_on = false;
        let mut turned_off = false;

        if let Some(record) = self.entities.users.get_mut(user) {
            turned_on = premium && !record.premium;
            turned_off = !premium && record.premium;
            record.premium = premium;
            record.updated_at = timestamp;
        }

        if turned_on {
            self.entities.stats.premium_users += 1;
        } else if turned_off {
            self.entities.stats.premium_users -= 1;
        }

        let id = envelope.entity_id();
        let change = PremiumStatusChange {
            id: id.clone(),
            user: user.to_string(),
            premium,
            timestamp,
        };

        self.entities.premium_changes.insert(id, change);
        self.entities.stats.updated_at = timestamp;
    }

    fn ensure_user(&mut self, address: &str, timestamp: u64) {
        if self.entities.users.contains_key(address) {
            return;
        }

        self.entities
            .users
            .insert(address.to_string(), User::fresh(address, timestamp));
        self.entities.stats.total_users += 1;
    }
}

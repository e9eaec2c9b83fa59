use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Serialized volumes at or past this size are closed; the next append
/// starts a fresh one.
pub const MAX_VOLUME_BYTES: usize = 25 * 1024 * 1024;

/// One diary post. `entry_id` is positional within its volume, starting
/// at 0; entries are written once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub entry_id: u32,
    pub date: DateTime<Utc>,
    pub text: String,
    #[serde(rename = "imageCIDs", default)]
    pub image_cids: Vec<String>,
}

/// The blob layout behind each on-chain pointer:
/// `{"volumeId": ..., "entries": [...]}` with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDoc {
    pub volume_id: u64,
    pub entries: Vec<DiaryEntry>,
}

impl VolumeDoc {
    pub fn new(volume_id: u64) -> Self {
        Self {
            volume_id,
            entries: Vec::new(),
        }
    }

    /// The next entry id is positional: the count of entries already here.
    pub fn next_entry_id(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn append(&mut self, date: DateTime<Utc>, text: String, image_cids: Vec<String>) -> u32 {
        let entry_id = self.next_entry_id();

        self.entries.push(DiaryEntry {
            entry_id,
            date,
            text,
            image_cids,
        });

        entry_id
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// UTC calendar day of every entry, duplicates included; callers that
    /// need the distinct set collect into one.
    pub fn entry_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().map(|entry| entry.date.date_naive())
    }
}

use serde::{Deserialize, Serialize};

/// Contract events the mirror consumes, in ledger order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DiaryEvent {
    DiaryUpdated {
        user: String,
        cid: String,
        timestamp: u64,
    },
    RewardIssued {
        user: String,
        timestamp: u64,
    },
    PremiumStatusChanged {
        user: String,
        premium: bool,
    },
}

/// One event with its position in the stream. `tx` and `index` make the
/// derived entity ids reproducible across replays; `ledger_timestamp` is
/// the close time of the ledger that carried the event, for payloads
/// that do not embed their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    pub tx: String,
    pub index: u32,
    pub ledger_timestamp: u64,
    pub event: DiaryEvent,
}

impl EventEnvelope {
    /// Stream-position id used for reward and premium-change entities.
    pub fn entity_id(&self) -> String {
        format!("{}-{}", self.tx, self.index)
    }
}

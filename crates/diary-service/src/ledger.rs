use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

/// Ledger-side view of one volume pointer. Serializes as the
/// `{cid, timestamp}` objects status reports carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePointer {
    pub cid: String,
    pub timestamp: u64,
}

/// Snapshot of a user's on-chain record.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStatus {
    pub premium: bool,
    pub images_used: u32,
    pub volume_count: u32,
    pub last_reward: u64,
    pub next_reward_in: u64,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("transaction rejected: {0}")]
    Rejected(String),
    #[error("the submitted signature does not authorize this call")]
    Unauthorized,
    #[error("chain unreachable: {0}")]
    Unreachable(String),
}

/// The contract surface the services consume. Implementations submit
/// transactions for the mutations and simulate for the views; users are
/// identified by their wallet address string.
pub trait DiaryLedger {
    fn update_diary(&self, user: &str, cid: &str) -> Result<(), LedgerError>;

    fn increment_image_upload(&self, user: &str) -> Result<u32, LedgerError>;

    fn set_premium(&self, user: &str, premium: bool) -> Result<(), LedgerError>;

    fn latest_cid(&self, user: &str) -> Result<Option<String>, LedgerError>;

    fn user_volumes(&self, user: &str) -> Result<Vec<VolumePointer>, LedgerError>;

    fn user_status(&self, user: &str) -> Result<LedgerStatus, LedgerError>;

    fn can_upload_image(&self, user: &str) -> Result<bool, LedgerError>;
}

impl<T: DiaryLedger + ?Sized> DiaryLedger for Arc<T> {
    fn update_diary(&self, user: &str, cid: &str) -> Result<(), LedgerError> {
        (**self).update_diary(user, cid)
    }

    fn increment_image_upload(&self, user: &str) -> Result<u32, LedgerError> {
        (**self).increment_image_upload(user)
    }

    fn set_premium(&self, user: &str, premium: bool) -> Result<(), LedgerError> {
        (**self).set_premium(user, premium)
    }

    fn latest_cid(&self, user: &str) -> Result<Option<String>, LedgerError> {
        (**self).latest_cid(user)
    }

    fn user_volumes(&self, user: &str) -> Result<Vec<VolumePointer>, LedgerError> {
        (**self).user_volumes(user)
    }

    fn user_status(&self, user: &str) -> Result<LedgerStatus, LedgerError> {
        (**self).user_status(user)
    }

    fn can_upload_image(&self, user: &str) -> Result<bool, LedgerError> {
        (**self).can_upload_image(user)
    }
}

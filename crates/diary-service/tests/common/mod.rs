// Shared by every integration binary; not all of them use every helper.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use diary_sc::{Contract, ContractClient};
use diary_service::{DiaryLedger, LedgerError, LedgerStatus, VolumePointer};
use soroban_sdk::{
    testutils::{Address as _, EnvTestConfig, Ledger},
    Address, Env, String as ChainString,
};

/// 2024-01-10 12:00:00 UTC, so day arithmetic in assertions stays legible.
pub const GENESIS: u64 = 1_704_888_000;

pub struct Harness {
    pub env: Env,
    pub contract: Address,
}

pub fn harness() -> Harness {
    let mut env = Env::default();

    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });

    env.ledger().set_min_temp_entry_ttl(17280);
    env.ledger().set_min_persistent_entry_ttl(2073600);
    env.ledger().set_timestamp(GENESIS);

    env.mock_all_auths();

    let owner = Address::generate(&env);
    let contract = env.register(Contract, (&owner,));

    Harness { env, contract }
}

pub fn forward(env: &Env, time: u64) {
    let ticks = (time / 5).max(1) as u32;

    env.ledger()
        .set_sequence_number(env.ledger().get().sequence_number + ticks);
    env.ledger()
        .set_timestamp(env.ledger().get().timestamp + time);
}

pub fn chain_now(env: &Env) -> DateTime<Utc> {
    DateTime::from_timestamp(env.ledger().timestamp() as i64, 0).unwrap()
}

/// Fresh account address as the strkey string the services pass around.
pub fn user_address(env: &Env) -> String {
    to_std(&Address::generate(env).to_string())
}

fn to_std(value: &ChainString) -> String {
    let mut buffer = vec![0u8; value.len() as usize];

    value.copy_into_slice(&mut buffer);

    String::from_utf8(buffer).unwrap()
}

/// `DiaryLedger` backed by the real contract in a test env. Mutations go
/// through `try_` invocations so contract rejections surface as
/// `LedgerError` instead of panicking the host.
pub struct ContractLedger {
    env: Env,
    contract: Address,
}

impl ContractLedger {
    pub fn new(harness: &Harness) -> Self {
        Self {
            env: harness.env.clone(),
            contract: harness.contract.clone(),
        }
    }

    fn client(&self) -> ContractClient<'_> {
        ContractClient::new(&self.env, &self.contract)
    }

    fn address(&self, user: &str) -> Address {
        Address::from_str(&self.env, user)
    }
}

impl DiaryLedger for ContractLedger {
    fn update_diary(&self, user: &str, cid: &str) -> Result<(), LedgerError> {
        let user = self.address(user);
        let cid = ChainString::from_str(&self.env, cid);

        self.client()
            .try_update_diary(&user, &cid)
            .map_err(|err| LedgerError::Rejected(format!("{err:?}")))?
            .map_err(|err| LedgerError::Rejected(format!("{err:?}")))
    }

    fn increment_image_upload(&self, user: &str) -> Result<u32, LedgerError> {
        let user = self.address(user);

        self.client()
            .try_increment_image_upload(&user)
            .map_err(|err| LedgerError::Rejected(format!("{err:?}")))?
            .map_err(|err| LedgerError::Rejected(format!("{err:?}")))
    }

    fn set_premium(&self, user: &str, premium: bool) -> Result<(), LedgerError> {
        let user = self.address(user);

        self.client()
            .try_set_premium(&user, &premium)
            .map_err(|err| LedgerError::Rejected(format!("{err:?}")))?
            .map_err(|err| LedgerError::Rejected(format!("{err:?}")))
    }

    fn latest_cid(&self, user: &str) -> Result<Option<String>, LedgerError> {
        let cid = self.client().latest_cid(&self.address(user));

        Ok(cid.map(|value| to_std(&value)))
    }

    fn user_volumes(&self, user: &str) -> Result<Vec<VolumePointer>, LedgerError> {
        let volumes = self.client().get_user_volumes(&self.address(user));

        Ok(volumes
            .iter()
            .map(|volume| VolumePointer {
                cid: to_std(&volume.cid),
                timestamp: volume.timestamp,
            })
            .collect())
    }

    fn user_status(&self, user: &str) -> Result<LedgerStatus, LedgerError> {
        let status = self.client().get_user_status(&self.address(user));

        Ok(LedgerStatus {
            premium: status.premium,
            images_used: status.images_used,
            volume_count: status.volume_count,
            last_reward: status.last_reward,
            next_reward_in: status.next_reward_in,
        })
    }

    fn can_upload_image(&self, user: &str) -> Result<bool, LedgerError> {
        Ok(self.client().can_upload_image(&self.address(user)))
    }
}

use crate::ContractArgs;
use soroban_sdk::{contractimpl, panic_with_error, Address, Env, String, Vec};

use crate::{
    errors::Errors,
    events,
    storage::{
        extend_instance_ttl, extend_user_ttl, get_user, get_volumes, push_volume, set_user,
    },
    types::{User, UserStatus, VolumeRef},
    Contract, ContractClient, DiaryTrait, MAX_FREE_IMAGES, ONE_DAY,
};

#[contractimpl]
impl DiaryTrait for Contract {
    fn update_diary(env: Env, user: Address, cid: String) {
        user.require_auth();

        if cid.len() == 0 {
            panic_with_error!(&env, &Errors::CidEmpty);
        }

        let now = env.ledger().timestamp();
        let mut record = get_user(&env, user.clone());

        push_volume(
            &env,
            user.clone(),
            VolumeRef {
                cid: cid.clone(),
                timestamp: now,
            },
        );

        events::diary_updated(&env, &user, &cid, now);

        // at most one reward per cooldown window, issued on the first update
        if reward_due(&record, now) {
            record.last_reward = now;
            set_user(&env, user.clone(), &record);

            events::reward_issued(&env, &user, now);
        }

        extend_user_ttl(&env, user);
        extend_instance_ttl(&env);
    }

    fn increment_image_upload(env: Env, user: Address) -> u32 {
        user.require_auth();

        let mut record = get_user(&env, user.clone());

        // premium journals bypass the quota and the counter stays untouched
        if record.premium {
            return record.images_used;
        }

        if record.images_used >= MAX_FREE_IMAGES {
            panic_with_error!(&env, &Errors::QuotaExceeded);
        }

        record.images_used += 1;
        set_user(&env, user.clone(), &record);

        events::free_image_uploaded(&env, &user, record.images_used);

        extend_user_ttl(&env, user);
        extend_instance_ttl(&env);

        record.images_used
    }

    fn latest_cid(env: Env, user: Address) -> Option<String> {
        get_volumes(&env, user).last().map(|volume| volume.cid)
    }

    fn get_user_volumes(env: Env, user: Address) -> Vec<VolumeRef> {
        get_volumes(&env, user)
    }

    fn get_volume_count(env: Env, user: Address) -> u32 {
        get_volumes(&env, user).len()
    }

    fn get_volume_at_index(env: Env, user: Address, index: u32) -> VolumeRef {
        get_volumes(&env, user)
            .get(index)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::VolumeIndexOutOfBounds))
    }

    fn get_user_status(env: Env, user: Address) -> UserStatus {
        let now = env.ledger().timestamp();
        let record = get_user(&env, user.clone());
        let volume_count = get_volumes(&env, user).len();

        UserStatus {
            premium: record.premium,
            images_used: record.images_used,
            volume_count,
            last_reward: record.last_reward,
            next_reward_in: time_until(&record, now),
        }
    }

    fn can_upload_image(env: Env, user: Address) -> bool {
        let record = get_user(&env, user);

        record.premium || record.images_used < MAX_FREE_IMAGES
    }

    fn is_eligible_for_reward(env: Env, user: Address) -> bool {
        let now = env.ledger().timestamp();

        reward_due(&get_user(&env, user), now)
    }

    fn time_until_next_reward(env: Env, user: Address) -> u64 {
        let now = env.ledger().timestamp();

        time_until(&get_user(&env, user), now)
    }
}

// The cooldown boundary is inclusive: exactly ONE_DAY elapsed is eligible.
fn reward_due(record: &User, now: u64) -> bool {
    record.last_reward == 0 || now - record.last_reward >= ONE_DAY
}

fn time_until(record: &User, now: u64) -> u64 {
    if reward_due(record, now) {
        0
    } else {
        ONE_DAY - (now - record.last_reward)
    }
}

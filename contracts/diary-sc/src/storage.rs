use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{
    errors::Errors,
    types::{Storage, User, VolumeRef},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn extend_user_ttl(env: &Env, user: Address) {
    let max_ttl = env.storage().max_ttl();
    let user_key = Storage::User(user.clone());
    let volumes_key = Storage::Volumes(user);

    if env.storage().persistent().has::<Storage>(&user_key) {
        env.storage()
            .persistent()
            .extend_ttl::<Storage>(&user_key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
    }

    if env.storage().persistent().has::<Storage>(&volumes_key) {
        env.storage()
            .persistent()
            .extend_ttl::<Storage>(&volumes_key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
    }
}

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Owner)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::OwnerMissing))
}
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Owner, owner);
}

pub fn get_user(env: &Env, user: Address) -> User {
    env.storage()
        .persistent()
        .get::<Storage, User>(&Storage::User(user))
        .unwrap_or(User {
            premium: false,
            images_used: 0,
            last_reward: 0,
        })
}
pub fn set_user(env: &Env, user: Address, record: &User) {
    env.storage()
        .persistent()
        .set::<Storage, User>(&Storage::User(user), record);
}

pub fn get_volumes(env: &Env, user: Address) -> Vec<VolumeRef> {
    env.storage()
        .persistent()
        .get::<Storage, Vec<VolumeRef>>(&Storage::Volumes(user))
        .unwrap_or_else(|| Vec::new(env))
}
pub fn push_volume(env: &Env, user: Address, volume: VolumeRef) {
    let mut volumes = get_volumes(env, user.clone());

    volumes.push_back(volume);

    env.storage()
        .persistent()
        .set::<Storage, Vec<VolumeRef>>(&Storage::Volumes(user), &volumes);
}

#![no_std]

use soroban_sdk::{contract, Address, BytesN, Env, String, Vec};

mod contract_diary;
mod contract_owner;
mod events;
mod storage;

pub mod errors;
pub mod types;

use types::{UserStatus, VolumeRef};

pub const ONE_DAY: u64 = 86400;
pub const MAX_FREE_IMAGES: u32 = 5;
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

#[contract]
pub struct Contract;

pub trait OwnerTrait {
    fn set_premium(env: Env, user: Address, premium: bool);

    fn transfer_ownership(env: Env, new_owner: Address);

    fn upgrade(env: Env, hash: BytesN<32>);

    fn owner(env: Env) -> Address;
}

pub trait DiaryTrait {
    fn update_diary(env: Env, user: Address, cid: String);

    fn increment_image_upload(env: Env, user: Address) -> u32;

    fn latest_cid(env: Env, user: Address) -> Option<String>;

    fn get_user_volumes(env: Env, user: Address) -> Vec<VolumeRef>;

    fn get_volume_count(env: Env, user: Address) -> u32;

    fn get_volume_at_index(env: Env, user: Address, index: u32) -> VolumeRef;

    fn get_user_status(env: Env, user: Address) -> UserStatus;

    fn can_upload_image(env: Env, user: Address) -> bool;

    fn is_eligible_for_reward(env: Env, user: Address) -> bool;

    fn time_until_next_reward(env: Env, user: Address) -> u64;
}

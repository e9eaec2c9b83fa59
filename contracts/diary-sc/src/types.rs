use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub premium: bool,
    pub images_used: u32,
    pub last_reward: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeRef {
    pub cid: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatus {
    pub premium: bool,
    pub images_used: u32,
    pub volume_count: u32,
    pub last_reward: u64,
    pub next_reward_in: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Owner,            // : address
    User(Address),    // (user) : User
    Volumes(Address), // (user) : Vec<VolumeRef>
}

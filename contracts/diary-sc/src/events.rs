use soroban_sdk::{symbol_short, Address, Env, String};

// One event per state transition, user in the topics so indexers can filter
// a single journal without scanning the whole stream.

pub fn diary_updated(env: &Env, user: &Address, cid: &String, timestamp: u64) {
    env.events().publish(
        (symbol_short!("updated"), user.clone()),
        (cid.clone(), timestamp),
    );
}

pub fn reward_issued(env: &Env, user: &Address, timestamp: u64) {
    env.events()
        .publish((symbol_short!("reward"), user.clone()), timestamp);
}

pub fn premium_status_changed(env: &Env, user: &Address, premium: bool) {
    env.events()
        .publish((symbol_short!("premium"), user.clone()), premium);
}

pub fn free_image_uploaded(env: &Env, user: &Address, count: u32) {
    env.events()
        .publish((symbol_short!("image"), user.clone()), count);
}

pub fn ownership_transferred(env: &Env, previous: &Address, new: &Address) {
    env.events().publish(
        (symbol_short!("owner"),),
        (previous.clone(), new.clone()),
    );
}

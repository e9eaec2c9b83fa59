use crate::ContractArgs;
use soroban_sdk::{contractimpl, panic_with_error, Address, BytesN, Env};

use crate::{
    errors::Errors,
    events,
    storage::{extend_instance_ttl, extend_user_ttl, get_owner, get_user, set_owner, set_user},
    Contract, ContractClient, OwnerTrait,
};

// Strkey of the all-zero ed25519 public key, the "no such account" identity.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contractimpl]
impl Contract {
    pub fn __constructor(env: Env, owner: Address) {
        set_owner(&env, &owner);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl OwnerTrait for Contract {
    fn set_premium(env: Env, user: Address, premium: bool) {
        get_owner(&env).require_auth();

        if user == Address::from_str(&env, NULL_ACCOUNT) {
            panic_with_error!(&env, &Errors::InvalidTarget);
        }

        let mut record = get_user(&env, user.clone());

        record.premium = premium;
        set_user(&env, user.clone(), &record);

        // setting the current value again still emits, subscribers rely on it
        events::premium_status_changed(&env, &user, premium);

        extend_user_ttl(&env, user);
        extend_instance_ttl(&env);
    }

    fn transfer_ownership(env: Env, new_owner: Address) {
        let previous = get_owner(&env);

        previous.require_auth();

        if new_owner == Address::from_str(&env, NULL_ACCOUNT) {
            panic_with_error!(&env, &Errors::InvalidTarget);
        }

        set_owner(&env, &new_owner);

        events::ownership_transferred(&env, &previous, &new_owner);

        extend_instance_ttl(&env);
    }

    fn upgrade(env: Env, hash: BytesN<32>) {
        get_owner(&env).require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }

    fn owner(env: Env) -> Address {
        get_owner(&env)
    }
}

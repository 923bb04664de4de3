use soroban_sdk::{Address, Env};

use crate::types::{DataKey, WrapperGroup};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

pub fn get_core(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Core).unwrap()
}

pub fn set_core(env: &Env, core: &Address) {
    env.storage().instance().set(&DataKey::Core, core);
    extend_instance_ttl(env);
}

pub fn has_core(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Core)
}

pub fn get_swap(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Swap).unwrap()
}

pub fn set_swap(env: &Env, swap: &Address) {
    env.storage().instance().set(&DataKey::Swap, swap);
    extend_instance_ttl(env);
}

pub fn get_group_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::GroupCounter)
        .unwrap_or(0)
}

pub fn set_group_counter(env: &Env, counter: u64) {
    env.storage()
        .instance()
        .set(&DataKey::GroupCounter, &counter);
    extend_instance_ttl(env);
}

pub fn get_wrapper_group(env: &Env, wrapper_group_id: u64) -> Option<WrapperGroup> {
    let key = DataKey::Group(wrapper_group_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_wrapper_group(env: &Env, wrapper_group_id: u64, group: &WrapperGroup) {
    let key = DataKey::Group(wrapper_group_id);
    env.storage().persistent().set(&key, group);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

use farm::utils::{bump_instance, bump_persistent, bump_persistent_if_present};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Vec};

use crate::error::ContractError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    TotalStaked,
    Stakers,
    Staker(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Address allowed to issue rewards, fixed at deployment
    pub owner: Address,
    /// Token ledger participants deposit into the farm
    pub stake_token: Address,
    /// Token ledger the farm pays rewards from
    pub reward_token: Address,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Farm: Config not set");
            panic_with_error!(env, ContractError::ConfigNotSet)
        });
    bump_instance(env);

    config
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerInfo {
    /// Amount of stake token currently held by the farm on behalf of the participant
    pub staked_amount: i128,
    pub is_staking: bool,
    /// Set on the first stake, never cleared. Guards the roster against duplicates.
    pub has_staked_before: bool,
}

/// Returns the participant record, or a zeroed one for identities that never staked.
pub fn get_staker(env: &Env, address: &Address) -> StakerInfo {
    let key = DataKey::Staker(address.clone());
    let info: StakerInfo = env.storage().persistent().get(&key).unwrap_or_default();
    bump_persistent_if_present(env, &key);

    info
}

pub fn save_staker(env: &Env, address: &Address, info: &StakerInfo) {
    let key = DataKey::Staker(address.clone());
    env.storage().persistent().set(&key, info);
    bump_persistent(env, &key);
}

pub fn get_stakers(env: &Env) -> Vec<Address> {
    let stakers = env
        .storage()
        .persistent()
        .get(&DataKey::Stakers)
        .unwrap_or_else(|| Vec::new(env));
    bump_persistent_if_present(env, &DataKey::Stakers);

    stakers
}

// Roster is append-only; callers make sure an address is pushed once.
pub fn add_staker(env: &Env, address: &Address) {
    let mut stakers = get_stakers(env);
    stakers.push_back(address.clone());
    env.storage().persistent().set(&DataKey::Stakers, &stakers);
    bump_persistent(env, &DataKey::Stakers);
}

pub fn init_total_staked(env: &Env) {
    env.storage().instance().set(&DataKey::TotalStaked, &0i128);
    bump_instance(env);
}

pub fn get_total_staked(env: &Env) -> i128 {
    let total_staked = env
        .storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0i128);
    bump_instance(env);

    total_staked
}

pub fn increase_total_staked(env: &Env, amount: i128) {
    let total_staked = get_total_staked(env);
    env.storage()
        .instance()
        .set(&DataKey::TotalStaked, &(total_staked + amount));
}

pub fn decrease_total_staked(env: &Env, amount: i128) {
    let total_staked = get_total_staked(env);
    env.storage()
        .instance()
        .set(&DataKey::TotalStaked, &(total_staked - amount));
}

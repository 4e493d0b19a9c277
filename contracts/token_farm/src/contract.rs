use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, String, Vec};

use crate::{
    error::ContractError,
    msg::ConfigResponse,
    storage::{
        add_staker, decrease_total_staked, get_config, get_staker, get_stakers,
        get_total_staked, increase_total_staked, init_total_staked, save_config, save_staker,
        Config, StakerInfo,
    },
    token_contract,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Dapp Token Farm: stake tokens, earn rewards"
);

pub const FARM_NAME: &str = "Dapp Token Farm";

#[contract]
pub struct TokenFarm;

pub trait TokenFarmTrait {
    // Deposits `amount` of stake token on behalf of `sender`.
    // The farm must be approved as spender on the stake token beforehand.
    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError>;

    // Returns the whole staked balance of `sender`. Unstaking with nothing staked is a no-op.
    fn unstake(env: Env, sender: Address) -> Result<(), ContractError>;

    // Owner only. Pays every currently staking participant its staked amount in reward token.
    // Each call pays again, there is no per-round bookkeeping.
    fn issue_rewards(env: Env, sender: Address) -> Result<(), ContractError>;

    // QUERIES

    fn query_staking_balance(env: Env, address: Address) -> i128;

    fn query_is_staking(env: Env, address: Address) -> bool;

    fn query_staker_info(env: Env, address: Address) -> StakerInfo;

    // Every address that ever staked, in order of their first stake
    fn query_stakers(env: Env) -> Vec<Address>;

    fn query_total_staked(env: Env) -> i128;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_owner(env: Env) -> Address;

    fn query_name(env: Env) -> String;
}

#[contractimpl]
impl TokenFarmTrait for TokenFarm {
    fn stake(env: Env, sender: Address, amount: i128) -> Result<(), ContractError> {
        sender.require_auth();

        if amount <= 0 {
            log!(
                &env,
                "Farm: Stake: Trying to stake {} which is not a positive amount",
                amount
            );
            return Err(ContractError::InvalidAmount);
        }

        let config = get_config(&env);
        let farm_address = env.current_contract_address();
        let stake_token_client = token_contract::Client::new(&env, &config.stake_token);

        let balance = stake_token_client.balance(&sender);
        if balance < amount {
            log!(
                &env,
                "Farm: Stake: Balance {} is not sufficient to stake {}",
                balance,
                amount
            );
            return Err(ContractError::InsufficientBalance);
        }

        let allowance = stake_token_client.allowance(&sender, &farm_address);
        if allowance < amount {
            log!(
                &env,
                "Farm: Stake: Allowance {} is not sufficient to stake {}",
                allowance,
                amount
            );
            return Err(ContractError::InsufficientAllowance);
        }

        stake_token_client.transfer_from(&farm_address, &sender, &farm_address, &amount);

        let mut staker = get_staker(&env, &sender);
        staker.staked_amount += amount;
        staker.is_staking = true;
        if !staker.has_staked_before {
            staker.has_staked_before = true;
            add_staker(&env, &sender);
        }
        save_staker(&env, &sender, &staker);
        increase_total_staked(&env, amount);

        env.events().publish(("stake", "user"), &sender);
        env.events().publish(("stake", "amount"), amount);

        Ok(())
    }

    fn unstake(env: Env, sender: Address) -> Result<(), ContractError> {
        sender.require_auth();

        let mut staker = get_staker(&env, &sender);
        let balance = staker.staked_amount;

        if balance > 0 {
            let config = get_config(&env);
            let farm_address = env.current_contract_address();
            let stake_token_client = token_contract::Client::new(&env, &config.stake_token);

            let farm_balance = stake_token_client.balance(&farm_address);
            if farm_balance < balance {
                log!(
                    &env,
                    "Farm: Unstake: Farm holds {} stake tokens, cannot return {}",
                    farm_balance,
                    balance
                );
                return Err(ContractError::InsufficientLedgerBalance);
            }

            stake_token_client.transfer(&farm_address, &sender, &balance);
            decrease_total_staked(&env, balance);
        }

        if staker.has_staked_before {
            staker.staked_amount = 0;
            staker.is_staking = false;
            save_staker(&env, &sender, &staker);
        }

        env.events().publish(("unstake", "user"), &sender);
        env.events().publish(("unstake", "amount"), balance);

        Ok(())
    }

    fn issue_rewards(env: Env, sender: Address) -> Result<(), ContractError> {
        sender.require_auth();

        let config = get_config(&env);
        if sender != config.owner {
            log!(&env, "Farm: Issue rewards: You are not authorized!");
            return Err(ContractError::Unauthorized);
        }

        let mut payouts: Vec<(Address, i128)> = Vec::new(&env);
        let mut total_payout = 0i128;
        for staker in get_stakers(&env).iter() {
            let info = get_staker(&env, &staker);
            if info.is_staking && info.staked_amount > 0 {
                total_payout += info.staked_amount;
                payouts.push_back((staker, info.staked_amount));
            }
        }

        let farm_address = env.current_contract_address();
        let reward_token_client = token_contract::Client::new(&env, &config.reward_token);

        let reward_supply = reward_token_client.balance(&farm_address);
        if reward_supply < total_payout {
            log!(
                &env,
                "Farm: Issue rewards: Reward supply {} does not cover payout of {}",
                reward_supply,
                total_payout
            );
            return Err(ContractError::InsufficientRewardSupply);
        }

        for (staker, amount) in payouts.iter() {
            reward_token_client.transfer(&farm_address, &staker, &amount);
        }

        env.events()
            .publish(("issue_rewards", "total"), total_payout);

        Ok(())
    }

    // QUERIES

    fn query_staking_balance(env: Env, address: Address) -> i128 {
        get_staker(&env, &address).staked_amount
    }

    fn query_is_staking(env: Env, address: Address) -> bool {
        get_staker(&env, &address).is_staking
    }

    fn query_staker_info(env: Env, address: Address) -> StakerInfo {
        get_staker(&env, &address)
    }

    fn query_stakers(env: Env) -> Vec<Address> {
        get_stakers(&env)
    }

    fn query_total_staked(env: Env) -> i128 {
        get_total_staked(&env)
    }

    fn query_config(env: Env) -> ConfigResponse {
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_owner(env: Env) -> Address {
        get_config(&env).owner
    }

    fn query_name(env: Env) -> String {
        String::from_str(&env, FARM_NAME)
    }
}

#[contractimpl]
impl TokenFarm {
    // The deploying identity becomes the owner. Token addresses and owner are fixed from here on.
    pub fn __constructor(env: Env, owner: Address, reward_token: Address, stake_token: Address) {
        let config = Config {
            owner: owner.clone(),
            stake_token,
            reward_token,
        };
        save_config(&env, &config);
        init_total_staked(&env);

        env.events().publish(("initialize", "owner"), &owner);
    }
}

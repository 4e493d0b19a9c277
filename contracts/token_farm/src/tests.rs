use soroban_sdk::{testutils::Address as _, Address, Env, String};

use self::setup::{deploy_farm_contract, deploy_token_contract, mint, ALLOWANCE_EXPIRATION_LEDGER};
use crate::{contract::FARM_NAME, error::ContractError};


#[test]
fn farming_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let investor = Address::generate(&env);

    let stake_token = deploy_token_contract(&env, &owner);
    let reward_token = deploy_token_contract(&env, &owner);
    let farm = deploy_farm_contract(&env, &owner, &reward_token.address, &stake_token.address);

    assert_eq!(farm.query_name(), String::from_str(&env, FARM_NAME));

    mint(&env, &reward_token, &owner, 1_000_000);
    reward_token.transfer(&owner, &farm.address, &1_000_000);
    assert_eq!(reward_token.balance(&farm.address), 1_000_000);

    mint(&env, &stake_token, &owner, 100);
    stake_token.transfer(&owner, &investor, &100);
    assert_eq!(stake_token.balance(&investor), 100);

    stake_token.approve(
        &investor,
        &farm.address,
        &100,
        &ALLOWANCE_EXPIRATION_LEDGER,
    );
    farm.stake(&investor, &100);

    assert_eq!(stake_token.balance(&investor), 0);
    assert_eq!(stake_token.balance(&farm.address), 100);
    assert_eq!(farm.query_staking_balance(&investor), 100);
    assert!(farm.query_is_staking(&investor));

    farm.issue_rewards(&owner);
    assert_eq!(reward_token.balance(&investor), 100);

    assert_eq!(
        farm.try_issue_rewards(&investor),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(reward_token.balance(&investor), 100);

    farm.unstake(&investor);

    assert_eq!(stake_token.balance(&investor), 100);
    assert_eq!(stake_token.balance(&farm.address), 0);
    assert_eq!(farm.query_staking_balance(&investor), 0);
    assert!(!farm.query_is_staking(&investor));
}

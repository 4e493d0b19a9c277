#![no_std]
mod contract;
mod error;
mod msg;
mod storage;

pub mod token_contract {
    pub use soroban_sdk::token::Client;
}

pub use contract::{TokenFarm, TokenFarmClient};
pub use error::ContractError;

#[cfg(test)]
mod tests;

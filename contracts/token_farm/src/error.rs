use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidAmount = 700,
    InsufficientBalance = 701,
    InsufficientAllowance = 702,
    InsufficientLedgerBalance = 703,
    InsufficientRewardSupply = 704,
    Unauthorized = 705,
    ConfigNotSet = 706,
}

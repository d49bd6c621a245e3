use soroban_sdk::{contracttype, Address};

use super::asset::Asset;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// Event payload published once per successful deposit.
pub struct AdapterExecuted {
    pub from_asset: Asset,
    pub to_asset: Asset,
    // The amount of from_asset consumed.
    pub amount_in: i128,
    // The measured amount of to_asset deposited into the hub.
    pub amount_out: i128,
    pub owner: Address,
    // The position id returned by the hub.
    pub position_id: u64,
}

use soroban_sdk::{contracttype, Address, Vec};

use super::{asset::Asset, permission::OperatorPermissions};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// A request to open a single hub position from funds held by the adapter.
pub struct PositionRequest {
    // The asset transferred to the adapter.
    pub from_asset: Asset,
    // The asset the hub position is funded with.
    pub to_asset: Asset,
    // The amount of from_asset to use.
    pub amount: i128,
    // The number of recurring executions.
    pub execution_count: u32,
    // Seconds between executions.
    pub interval_seconds: u64,
    // The owner of the new position.
    pub owner: Address,
    // Operators granted delegated capabilities over the position.
    pub permissions: Vec<OperatorPermissions>,
}

impl PositionRequest {
    pub fn is_valid(&self) -> bool {
        self.amount > 0 && self.execution_count > 0 && self.interval_seconds > 0
    }
}

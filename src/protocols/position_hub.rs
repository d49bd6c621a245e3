use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::permission::EncodedPermission;

// The external position hub. `deposit` pulls `amount` of `from` from
// `depositor` through an allowance and opens a recurring position that
// converts it into `to` over `amount_of_swaps` executions spaced
// `swap_interval` seconds apart.
//
// Operator permissions are bitmasks with INCREASE=0, REDUCE=1, WITHDRAW=2,
// TERMINATE=3 (see `Capability`). The hub rejects invalid schedules itself.
#[contractclient(name = "PositionHubClient")]
pub trait PositionHub {
    fn deposit(
        env: Env,
        depositor: Address,
        from: Address,
        to: Address,
        amount: i128,
        amount_of_swaps: u32,
        swap_interval: u64,
        owner: Address,
        permissions: Vec<EncodedPermission>,
    ) -> u64;
}

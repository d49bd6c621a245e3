use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// The configuration parameters for the contract, fixed at construction.
pub struct ConfigData {
    // The swap router contract address.
    pub router: Address,
    // The position hub contract address.
    pub hub: Address,
    // The token contract of the native asset.
    pub native_asset: Address,
    // Maximum residual balance of either asset tolerated after a deposit.
    pub dust_tolerance: i128,
}

use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// An asset the adapter can receive or deposit.
pub enum Asset {
    // The chain's base value unit, reached through its token contract.
    Native,
    // A fungible token contract.
    Token(Address),
}

impl Asset {
    // Resolves the token contract backing the asset.
    pub fn address(&self, native_asset: &Address) -> Address {
        match self {
            Asset::Native => native_asset.clone(),
            Asset::Token(address) => address.clone(),
        }
    }
}

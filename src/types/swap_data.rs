use soroban_sdk::{contracttype, Bytes};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// Routing instructions for the swap router, computed off-chain.
pub struct SwapData {
    // Opaque route passed through to the router.
    pub route: Bytes,
    // Minimum acceptable output, checked against the measured balance delta.
    pub min_amount_out: i128,
}

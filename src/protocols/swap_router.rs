use soroban_sdk::{contractclient, Address, Bytes, Env};

// The external swap router. It pulls `amount_in` of `token_in` from `sender`
// through an allowance and pays `token_out` back to `sender`.
//
// The returned amount is what the router claims to have paid out. The adapter
// never uses it for accounting.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouter {
    fn swap(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        min_amount_out: i128,
        route: Bytes,
    ) -> i128;
}

use soroban_sdk::{token::TokenClient, Address, Env};

// Approves `spender` for exactly `amount`, valid until the end of the current ledger.
pub fn grant(e: &Env, token: &Address, spender: &Address, amount: i128) {
    TokenClient::new(e, token).approve(
        &e.current_contract_address(),
        spender,
        &amount,
        &e.ledger().sequence(),
    );
}

// Clears whatever the spender left unused.
pub fn revoke(e: &Env, token: &Address, spender: &Address) {
    let client = TokenClient::new(e, token);
    let adapter = e.current_contract_address();
    if client.allowance(&adapter, spender) > 0 {
        client.approve(&adapter, spender, &0, &e.ledger().sequence());
    }
}

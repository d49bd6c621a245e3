use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::types::error::Error;

// Measures what the adapter actually holds of `token` instead of trusting the
// requested amount.
pub fn receive(e: &Env, token: &Address, requested: i128) -> Result<i128, Error> {
    let held = TokenClient::new(e, token).balance(&e.current_contract_address());
    log!(e, "held balance", held, requested);
    if held < requested {
        return Err(Error::InsufficientBalance);
    }
    Ok(held.min(requested))
}

use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::types::error::Error;

// Fails if the adapter still holds more than `dust_tolerance` of either token.
// The adapter has no sweep entrypoint, so anything left here would be stuck.
pub fn reconcile(
    e: &Env,
    token_in: &Address,
    token_out: &Address,
    dust_tolerance: i128,
) -> Result<(), Error> {
    check_residual(e, token_in, dust_tolerance)?;
    if token_out != token_in {
        check_residual(e, token_out, dust_tolerance)?;
    }
    Ok(())
}

fn check_residual(e: &Env, token: &Address, dust_tolerance: i128) -> Result<(), Error> {
    let residual = TokenClient::new(e, token).balance(&e.current_contract_address());
    if residual > dust_tolerance {
        log!(e, "residual balance", token.clone(), residual);
        return Err(Error::ResidualBalanceError);
    }
    Ok(())
}

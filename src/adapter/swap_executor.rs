use soroban_sdk::{log, token::TokenClient, Address, Env};

use super::allowance;
use crate::protocols::swap_router::SwapRouterClient;
use crate::types::{error::Error, swap_data::SwapData};

// Swaps exactly `amount_in` of `token_in` into `token_out` through the router
// and returns the amount actually received.
//
// The output is the change in the adapter's `token_out` balance across the
// call. The router's own return value is only logged, since tokens may
// deliver less than transferred and routers may misreport.
pub fn swap(
    e: &Env,
    router: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    swap_data: &SwapData,
) -> Result<i128, Error> {
    let adapter = e.current_contract_address();
    let output = TokenClient::new(e, token_out);
    let balance_before = output.balance(&adapter);

    allowance::grant(e, token_in, router, amount_in);
    let reported = match SwapRouterClient::new(e, router).try_swap(
        &adapter,
        token_in,
        token_out,
        &amount_in,
        &swap_data.min_amount_out,
        &swap_data.route,
    ) {
        Ok(Ok(reported)) => reported,
        Err(Ok(err)) => {
            log!(e, "router rejected swap", err.get_code());
            return Err(Error::SwapFailure);
        }
        _ => {
            log!(e, "router call failed");
            return Err(Error::SwapFailure);
        }
    };
    allowance::revoke(e, token_in, router);

    let balance_after = output.balance(&adapter);
    let amount_out = balance_after
        .checked_sub(balance_before)
        .ok_or(Error::IntegerOverflow)?;
    log!(e, "swap output", amount_out, reported);

    if amount_out <= 0 || amount_out < swap_data.min_amount_out {
        return Err(Error::SwapFailure);
    }
    Ok(amount_out)
}

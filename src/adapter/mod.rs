mod allowance;
pub mod permission_codec;
pub mod position_opener;
pub mod receiver;
pub mod reconciler;
pub mod swap_executor;

use soroban_sdk::{log, Env, Symbol};

use crate::extensions::env_extensions::EnvExtensions;
use crate::types::{
    adapter_executed::AdapterExecuted, error::Error, position_request::PositionRequest,
    stage::Stage, swap_data::SwapData,
};

const EXECUTED_TOPIC: &str = "adapter_executed";

// Runs one deposit from start to finish and returns the hub's position id.
//
// Nothing is kept between calls. On error the host discards every transfer,
// allowance and event made during the invocation.
pub fn execute(e: &Env, request: PositionRequest, swap_data: SwapData) -> Result<u64, Error> {
    execute_stages(e, &request, &swap_data).map_err(|err| {
        log!(e, "deposit aborted", err.stage());
        err
    })
}

fn execute_stages(e: &Env, request: &PositionRequest, swap_data: &SwapData) -> Result<u64, Error> {
    let config = e.get_config();
    let token_in = request.from_asset.address(&config.native_asset);
    let token_out = request.to_asset.address(&config.native_asset);

    if !request.is_valid() {
        return Err(Error::InvalidRequest);
    }

    // permissions are validated before any cross-contract call is made
    log!(e, "stage", Stage::PermissionEncoding);
    let permissions = permission_codec::encode(e, &request.permissions)?;

    log!(e, "stage", Stage::Receiving);
    let amount_in = receiver::receive(e, &token_in, request.amount)?;

    let amount_out = if token_in == token_out {
        amount_in
    } else {
        log!(e, "stage", Stage::Swapping);
        swap_executor::swap(e, &config.router, &token_in, &token_out, amount_in, swap_data)?
    };

    log!(e, "stage", Stage::Depositing);
    let position_id = position_opener::open(
        e,
        &config.hub,
        &token_out,
        amount_out,
        request,
        &permissions,
    )?;

    log!(e, "stage", Stage::Reconciling);
    reconciler::reconcile(e, &token_in, &token_out, config.dust_tolerance)?;

    e.events().publish(
        (Symbol::new(e, EXECUTED_TOPIC), request.owner.clone()),
        AdapterExecuted {
            from_asset: request.from_asset.clone(),
            to_asset: request.to_asset.clone(),
            amount_in,
            amount_out,
            owner: request.owner.clone(),
            position_id,
        },
    );
    log!(e, "stage", Stage::Committed);

    Ok(position_id)
}

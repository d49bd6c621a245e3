use soroban_sdk::{log, Address, Env, Vec};

use super::allowance;
use crate::protocols::position_hub::PositionHubClient;
use crate::types::{error::Error, permission::EncodedPermission, position_request::PositionRequest};

// Opens the hub position with `amount` of `token` and returns the hub's
// position id. Hub rejections are not reinterpreted, they all surface as
// `DepositFailure`.
pub fn open(
    e: &Env,
    hub: &Address,
    token: &Address,
    amount: i128,
    request: &PositionRequest,
    permissions: &Vec<EncodedPermission>,
) -> Result<u64, Error> {
    let adapter = e.current_contract_address();

    allowance::grant(e, token, hub, amount);
    let position_id = match PositionHubClient::new(e, hub).try_deposit(
        &adapter,
        token,
        token,
        &amount,
        &request.execution_count,
        &request.interval_seconds,
        &request.owner,
        permissions,
    ) {
        Ok(Ok(position_id)) => position_id,
        Err(Ok(err)) => {
            log!(e, "hub rejected deposit", err.get_code());
            return Err(Error::DepositFailure);
        }
        _ => {
            log!(e, "hub call failed");
            return Err(Error::DepositFailure);
        }
    };
    allowance::revoke(e, token, hub);

    log!(e, "position opened", position_id, amount);
    Ok(position_id)
}

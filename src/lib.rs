#![no_std]

mod adapter;
mod extensions;
mod protocols;
pub mod types;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

use extensions::env_extensions::EnvExtensions;
use types::{
    config_data::ConfigData, error::Error, position_request::PositionRequest,
    swap_data::SwapData,
};

#[contract]
pub struct HubAdapterContract;

#[contractimpl]
impl HubAdapterContract {
    // Stores the router, hub, native asset and dust tolerance. They cannot be changed afterwards.
    //
    // # Panics
    //
    // Panics with `ConfigurationError` if the router and hub are the same contract,
    // either of them is the adapter itself, or the dust tolerance is negative.
    pub fn __constructor(e: Env, config: ConfigData) {
        let this = e.current_contract_address();
        if config.router == config.hub
            || config.router == this
            || config.hub == this
            || config.dust_tolerance < 0
        {
            panic_with_error!(&e, Error::ConfigurationError);
        }
        e.set_config(&config);
    }

    // Returns the position hub address.
    pub fn hub(e: Env) -> Address {
        e.get_hub()
    }

    // Returns the swap router address.
    pub fn router(e: Env) -> Address {
        e.get_router()
    }

    // Returns the token contract used for the native asset.
    pub fn native_asset(e: Env) -> Address {
        e.get_native_asset()
    }

    // Returns the residual balance tolerated after a deposit.
    pub fn dust_tolerance(e: Env) -> i128 {
        e.get_dust_tolerance()
    }

    // Returns the full construction config.
    pub fn config(e: Env) -> ConfigData {
        e.get_config()
    }

    // Returns the contract major version.
    pub fn version(_e: Env) -> u32 {
        env!("CARGO_PKG_VERSION")
            .split(".")
            .next()
            .unwrap()
            .parse::<u32>()
            .unwrap()
    }

    // Opens a hub position from funds already transferred to the adapter.
    //
    // The `from_asset` is swapped into `to_asset` through the router unless they are
    // the same token, in which case `swap` is ignored. The measured output is deposited
    // into the hub for `owner`, with the requested operator permissions. Publishes an
    // `adapter_executed` event on success.
    //
    // # Arguments
    //
    // * `request` - Assets, amount, schedule, owner and operator permissions
    // * `swap` - Router route and minimum acceptable output
    //
    // # Returns
    //
    // The position id assigned by the hub
    pub fn deposit(e: Env, request: PositionRequest, swap: SwapData) -> Result<u64, Error> {
        e.extend_instance_ttl();
        adapter::execute(&e, request, swap)
    }
}

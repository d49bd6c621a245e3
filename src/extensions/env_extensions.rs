use soroban_sdk::storage::Instance;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::types;

use types::{config_data::ConfigData, error::Error};
const CONFIG_KEY: &str = "config";

// ~30 days at 5s per ledger
const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 17_280;

pub trait EnvExtensions {
    fn get_config(&self) -> ConfigData;

    fn set_config(&self, config: &ConfigData);

    fn get_router(&self) -> Address;

    fn get_hub(&self) -> Address;

    fn get_native_asset(&self) -> Address;

    fn get_dust_tolerance(&self) -> i128;

    fn extend_instance_ttl(&self);
}

impl EnvExtensions for Env {
    fn get_config(&self) -> ConfigData {
        get_instance_storage(self)
            .get(&CONFIG_KEY)
            .unwrap_or_else(|| panic_with_error!(self, Error::ConfigurationError))
    }

    fn set_config(&self, config: &ConfigData) {
        get_instance_storage(self).set(&CONFIG_KEY, config);
    }

    fn get_router(&self) -> Address {
        self.get_config().router
    }

    fn get_hub(&self) -> Address {
        self.get_config().hub
    }

    fn get_native_asset(&self) -> Address {
        self.get_config().native_asset
    }

    fn get_dust_tolerance(&self) -> i128 {
        self.get_config().dust_tolerance
    }

    fn extend_instance_ttl(&self) {
        get_instance_storage(self).extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}

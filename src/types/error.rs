use soroban_sdk::contracterror;

use super::stage::Stage;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
// The error codes for the contract.
pub enum Error {
    // The adapter holds less of the input asset than requested.
    InsufficientBalance = 1,
    // The router call reverted or delivered less than the minimum output.
    SwapFailure = 2,
    // The permission list has a duplicate operator or an unknown capability.
    PermissionEncodingError = 3,
    // The hub rejected the deposit.
    DepositFailure = 4,
    // A balance above the dust tolerance remained after the deposit.
    ResidualBalanceError = 5,
    // The construction config is invalid.
    ConfigurationError = 6,
    // The amount, interval or execution count is not positive.
    InvalidRequest = 7,
    // Integer overflow occurred during balance accounting.
    IntegerOverflow = 8,
}

impl Error {
    // The stage of the deposit flow the error is raised from.
    pub fn stage(&self) -> Stage {
        match self {
            Error::InsufficientBalance => Stage::Receiving,
            Error::SwapFailure | Error::IntegerOverflow => Stage::Swapping,
            Error::PermissionEncodingError => Stage::PermissionEncoding,
            Error::DepositFailure => Stage::Depositing,
            Error::ResidualBalanceError => Stage::Reconciling,
            // raised before the first stage is entered
            Error::InvalidRequest | Error::ConfigurationError => Stage::Idle,
        }
    }
}

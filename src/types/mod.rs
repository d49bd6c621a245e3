pub mod adapter_executed;
pub mod asset;
pub mod config_data;
pub mod error;
pub mod permission;
pub mod position_request;
pub mod stage;
pub mod swap_data;

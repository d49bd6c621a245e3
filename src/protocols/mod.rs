pub mod position_hub;
pub mod swap_router;

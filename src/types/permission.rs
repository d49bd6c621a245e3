use soroban_sdk::{contracttype, Address, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// Capabilities requested for one operator, as raw capability codes.
pub struct OperatorPermissions {
    pub operator: Address,
    pub capabilities: Vec<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]

// The hub's compact form: one bit per capability.
pub struct EncodedPermission {
    pub operator: Address,
    pub permissions: u32,
}

// Capability bit positions. The ordering is defined by the hub and must not change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Capability {
    Increase = 0,
    Reduce = 1,
    Withdraw = 2,
    Terminate = 3,
}

impl Capability {
    pub fn from_code(code: u32) -> Option<Capability> {
        match code {
            0 => Some(Capability::Increase),
            1 => Some(Capability::Reduce),
            2 => Some(Capability::Withdraw),
            3 => Some(Capability::Terminate),
            _ => None,
        }
    }

    pub fn bit(self) -> u32 {
        1 << (self as u32)
    }
}

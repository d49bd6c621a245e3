use soroban_sdk::contracttype;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
// Steps of a single deposit invocation.
// Logged in execution order: PermissionEncoding runs before Receiving so that
// permissions are rejected before any cross-contract call.
pub enum Stage {
    Idle = 0,
    Receiving = 1,
    Swapping = 2,
    PermissionEncoding = 3,
    Depositing = 4,
    Reconciling = 5,
    Committed = 6,
}

use soroban_sdk::{Env, Vec};

use crate::types::{
    error::Error,
    permission::{Capability, EncodedPermission, OperatorPermissions},
};

// Converts raw operator capability lists into the hub's bitmask form,
// preserving operator order.
//
// # Errors
//
// `PermissionEncodingError` if an operator appears twice, has no
// capabilities, or lists a code outside INCREASE..=TERMINATE.
pub fn encode(
    e: &Env,
    raw: &Vec<OperatorPermissions>,
) -> Result<Vec<EncodedPermission>, Error> {
    let mut encoded: Vec<EncodedPermission> = Vec::new(e);
    for entry in raw.iter() {
        if encoded.iter().any(|p| p.operator == entry.operator) {
            return Err(Error::PermissionEncodingError);
        }
        if entry.capabilities.is_empty() {
            return Err(Error::PermissionEncodingError);
        }
        let mut permissions = 0u32;
        for code in entry.capabilities.iter() {
            let capability = Capability::from_code(code).ok_or(Error::PermissionEncodingError)?;
            permissions |= capability.bit();
        }
        encoded.push_back(EncodedPermission {
            operator: entry.operator,
            permissions,
        });
    }
    Ok(encoded)
}

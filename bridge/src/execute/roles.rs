//! Role management handlers.
//!
//! Role design is flat: Admin manages every membership, Manager is a tag peer
//! to the other non-admin roles. Signer members are identified by their
//! 20-byte recovery address rather than a bech32 address, since signers never
//! transact on this chain themselves.

use cosmwasm_std::{Api, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::signature::{format_signer_address, parse_signer_address};
use crate::state::{has_role, Role, ROLES};

/// Fail with `Forbidden` unless the caller holds the given role.
pub fn ensure_role(
    storage: &dyn Storage,
    member: &str,
    role: Role,
) -> Result<(), ContractError> {
    if !has_role(storage, role, member)? {
        return Err(ContractError::Forbidden);
    }
    Ok(())
}

/// Normalize a member identity for storage, per role.
///
/// Signer identities are lowercase 0x-hex recovery addresses; everything else
/// must be a valid address on this chain.
pub fn normalize_member(api: &dyn Api, role: Role, member: &str) -> Result<String, ContractError> {
    match role {
        Role::Signer => {
            let address = parse_signer_address(member)?;
            Ok(format_signer_address(&address))
        }
        _ => Ok(api.addr_validate(member)?.to_string()),
    }
}

/// Grant a role to a member.
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    member: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    let member = normalize_member(deps.api, role, &member)?;
    ROLES.save(deps.storage, (role.as_str(), &member), &true)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("member", member))
}

/// Revoke a role from a member.
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    member: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    let member = normalize_member(deps.api, role, &member)?;
    ROLES.remove(deps.storage, (role.as_str(), &member));

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("member", member))
}

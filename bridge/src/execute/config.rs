//! Configuration management handlers.
//!
//! This module handles:
//! - Confirmation threshold
//! - Input fee
//! - Deposit amount limits
//! - Destination chain toggling
//! - Pause/unpause (gates the deposit path only)

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::roles::ensure_role;
use crate::state::{Role, CONFIG, DEST_CHAINS, MAX_FEE_BPS};

/// Set the required count of signer signatures per execute.
pub fn execute_set_min_confirmations(
    deps: DepsMut,
    info: MessageInfo,
    min_confirmations: u32,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    if min_confirmations == 0 {
        return Err(ContractError::ZeroValue);
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.min_confirmations = min_confirmations;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_min_confirmations")
        .add_attribute("min_confirmations", min_confirmations.to_string()))
}

/// Set the input fee. Zero disables the fee; values above the cap are
/// rejected.
pub fn execute_set_fees(
    deps: DepsMut,
    info: MessageInfo,
    fee_bps: u32,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    if fee_bps > MAX_FEE_BPS {
        return Err(ContractError::InvalidFee {
            fee_bps,
            max_bps: MAX_FEE_BPS,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.fee_bps = fee_bps;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_fees")
        .add_attribute("fee_bps", fee_bps.to_string()))
}

/// Set the deposit bounds as an atomic pair. Either bound may be zero to
/// disable it independently.
pub fn execute_set_limit_amounts(
    deps: DepsMut,
    info: MessageInfo,
    min_amount: Uint128,
    max_amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    if !min_amount.is_zero() && !max_amount.is_zero() && min_amount > max_amount {
        return Err(ContractError::MinExceedsMax {
            min_amount,
            max_amount,
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    config.min_amount = min_amount;
    config.max_amount = max_amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_limit_amounts")
        .add_attribute("min_amount", min_amount.to_string())
        .add_attribute("max_amount", max_amount.to_string()))
}

/// Toggle a destination chain id in the allowed set.
///
/// Calling twice with the same id inserts then removes it. This is the
/// observed contract behavior, not an add-if-absent operation.
pub fn execute_set_destination_chain_id(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    let allowed = DEST_CHAINS
        .may_load(deps.storage, chain_id)?
        .unwrap_or(false);
    DEST_CHAINS.save(deps.storage, chain_id, &!allowed)?;

    Ok(Response::new()
        .add_attribute("action", "set_destination_chain_id")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("allowed", (!allowed).to_string()))
}

/// Pause the deposit path.
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    let mut config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::AlreadyPaused);
    }
    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

/// Resume the deposit path.
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ensure_role(deps.storage, info.sender.as_str(), Role::Admin)?;

    let mut config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

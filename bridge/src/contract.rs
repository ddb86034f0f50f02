//! Multi-signature bridge contract - entry points.
//!
//! The implementation is modularized into:
//! - `execute/` - execute message handlers
//! - `query` - query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_deposit, execute_grant_role, execute_pause, execute_release, execute_revoke_role,
    execute_set_destination_chain_id, execute_set_fees, execute_set_limit_amounts,
    execute_set_min_confirmations, execute_unpause, normalize_member,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_destination_chain_id, query_executed, query_fee_amount, query_has_role,
};
use crate::state::{
    Config, Role, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEST_CHAINS, MAX_FEE_BPS, ROLES,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.admin.is_empty() || msg.token.is_empty() {
        return Err(ContractError::ZeroValue);
    }
    if msg.signers.is_empty() || msg.executors.is_empty() {
        return Err(ContractError::ZeroValue);
    }
    if msg.min_confirmations == 0 {
        return Err(ContractError::ZeroValue);
    }

    if msg.fee_bps > MAX_FEE_BPS {
        return Err(ContractError::InvalidFee {
            fee_bps: msg.fee_bps,
            max_bps: MAX_FEE_BPS,
        });
    }

    if !msg.min_amount.is_zero() && !msg.max_amount.is_zero() && msg.min_amount > msg.max_amount {
        return Err(ContractError::MinExceedsMax {
            min_amount: msg.min_amount,
            max_amount: msg.max_amount,
        });
    }

    let admin = deps.api.addr_validate(&msg.admin)?;
    let token = deps.api.addr_validate(&msg.token)?;

    let config = Config {
        token,
        fee_bps: msg.fee_bps,
        min_amount: msg.min_amount,
        max_amount: msg.max_amount,
        min_confirmations: msg.min_confirmations,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    ROLES.save(deps.storage, (Role::Admin.as_str(), admin.as_str()), &true)?;

    let signer_count = msg.signers.len();
    for signer in msg.signers {
        let member = normalize_member(deps.api, Role::Signer, &signer)?;
        ROLES.save(deps.storage, (Role::Signer.as_str(), &member), &true)?;
    }

    let executor_count = msg.executors.len();
    for executor in msg.executors {
        let member = normalize_member(deps.api, Role::Executor, &executor)?;
        ROLES.save(deps.storage, (Role::Executor.as_str(), &member), &true)?;
    }

    for chain_id in msg.destination_chain_ids {
        DEST_CHAINS.save(deps.storage, chain_id, &true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token", config.token)
        .add_attribute("signer_count", signer_count.to_string())
        .add_attribute("executor_count", executor_count.to_string())
        .add_attribute("min_confirmations", config.min_confirmations.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfer paths
        ExecuteMsg::Deposit {
            amount,
            dest_chain_id,
        } => execute_deposit(deps, info, amount, dest_chain_id),
        ExecuteMsg::Execute {
            receiver,
            amount,
            tx_id,
            deadline,
            signatures,
        } => execute_release(deps, env, info, receiver, amount, tx_id, deadline, signatures),

        // Role management
        ExecuteMsg::GrantRole { role, member } => execute_grant_role(deps, info, role, member),
        ExecuteMsg::RevokeRole { role, member } => execute_revoke_role(deps, info, role, member),

        // Configuration
        ExecuteMsg::SetMinConfirmations { min_confirmations } => {
            execute_set_min_confirmations(deps, info, min_confirmations)
        }
        ExecuteMsg::SetFees { fee_bps } => execute_set_fees(deps, info, fee_bps),
        ExecuteMsg::SetLimitAmounts {
            min_amount,
            max_amount,
        } => execute_set_limit_amounts(deps, info, min_amount, max_amount),
        ExecuteMsg::SetDestinationChainId { chain_id } => {
            execute_set_destination_chain_id(deps, info, chain_id)
        }
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::HasRole { role, member } => to_json_binary(&query_has_role(deps, role, member)?),
        QueryMsg::DestinationChainId { chain_id } => {
            to_json_binary(&query_destination_chain_id(deps, chain_id)?)
        }
        QueryMsg::FeeAmount { amount } => to_json_binary(&query_fee_amount(deps, amount)?),
        QueryMsg::Executed { tx_id } => to_json_binary(&query_executed(deps, tx_id)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

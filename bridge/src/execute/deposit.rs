//! Deposit path handler.
//!
//! A deposit burns the full amount from the caller; the fee split is
//! computed off-chain by signers (via the FeeAmount query) when deciding the
//! execute amount on the destination chain. Total token supply therefore
//! drops by exactly the deposited amount.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::query::fee_split;
use crate::state::{CONFIG, DEST_CHAINS};

/// Burn `amount` from the caller for bridging to `dest_chain_id`.
///
/// Every precondition is evaluated before the burn message is emitted; a
/// failing burn (insufficient balance or allowance) aborts the whole call
/// with the token's own error.
pub fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
    dest_chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let allowed = DEST_CHAINS
        .may_load(deps.storage, dest_chain_id)?
        .unwrap_or(false);
    if !allowed {
        return Err(ContractError::InvalidDestination {
            chain_id: dest_chain_id,
        });
    }

    if !config.min_amount.is_zero() && amount < config.min_amount {
        return Err(ContractError::MinAmountUnderflow {
            min_amount: config.min_amount,
        });
    }

    if !config.max_amount.is_zero() && amount > config.max_amount {
        return Err(ContractError::MaxAmountOverflow {
            max_amount: config.max_amount,
        });
    }

    let burn: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::BurnFrom {
            owner: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    // Informational for off-chain signers observing the event
    let (fee_amount, after_fee_amount) = fee_split(config.fee_bps, amount);

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("action", "deposit")
        .add_attribute("depositor", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("dest_chain_id", dest_chain_id.to_string())
        .add_attribute("fee_amount", fee_amount.to_string())
        .add_attribute("after_fee_amount", after_fee_amount.to_string()))
}

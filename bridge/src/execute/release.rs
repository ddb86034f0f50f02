//! Execute path handler - the critical section.
//!
//! Verifies a threshold multi-signature attestation and performs the
//! corresponding mint exactly once per source transaction id. The execution
//! record is written before the mint message is emitted
//! (checks-effects-interactions), so a reentering token call can never
//! observe the record unset.
//!
//! Pause deliberately does not gate this path; only deposits are pausable.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::roles::ensure_role;
use crate::hash::{attestation_hash, bytes32_to_hex};
use crate::signature::{format_signer_address, recover_signer, split_signatures};
use crate::state::{has_role, Role, CONFIG, EXECUTED};

/// Mint `amount` to `receiver`, authorized by `signatures` over the
/// attestation tuple. Caller must hold the Executor role.
pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    receiver: String,
    amount: Uint128,
    tx_id: Binary,
    deadline: u64,
    signatures: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure_role(deps.storage, info.sender.as_str(), Role::Executor)?;

    if env.block.time.seconds() > deadline {
        return Err(ContractError::Expired { deadline });
    }

    let slices = split_signatures(&signatures)?;

    let got = slices.len() as u32;
    if got < config.min_confirmations {
        return Err(ContractError::NotEnoughConfirmations {
            got,
            required: config.min_confirmations,
        });
    }

    let tx_id_bytes: [u8; 32] = tx_id
        .to_vec()
        .try_into()
        .map_err(|_| ContractError::InvalidHashLength { got: tx_id.len() })?;

    let receiver_addr = deps.api.addr_validate(&receiver)?;

    // The attestation binds the signature to this contract on this chain; a
    // signature produced for another bridge or chain recovers to a stranger.
    let msg_hash = attestation_hash(
        receiver_addr.as_str(),
        env.contract.address.as_str(),
        amount.u128(),
        &env.block.chain_id,
        &tx_id_bytes,
        deadline,
    );

    let mut seen: Vec<[u8; 20]> = Vec::with_capacity(slices.len());
    for slice in slices {
        let signer = recover_signer(deps.api, &msg_hash, slice)?;
        let identity = format_signer_address(&signer);

        if !has_role(deps.storage, Role::Signer, &identity)? {
            return Err(ContractError::NotASigner { signer: identity });
        }
        if seen.contains(&signer) {
            return Err(ContractError::SameSigner { signer: identity });
        }
        seen.push(signer);
    }

    if EXECUTED
        .may_load(deps.storage, &tx_id_bytes)?
        .unwrap_or(false)
    {
        return Err(ContractError::AlreadyExecuted {
            tx_id: bytes32_to_hex(&tx_id_bytes),
        });
    }

    // Mark executed strictly before the external mint call
    EXECUTED.save(deps.storage, &tx_id_bytes, &true)?;

    let mint: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: receiver_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "execute")
        .add_attribute("receiver", receiver_addr)
        .add_attribute("amount", amount.to_string())
        .add_attribute("tx_id", bytes32_to_hex(&tx_id_bytes))
        .add_attribute("confirmations", got.to_string()))
}
